use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a piece of user input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// Nothing left after trimming
    Empty,
    TooShort,
    TooLong,
    /// Value outside an enumerated set (e.g. playback rate)
    Unsupported,
}

/// Input rejected at its origin. Local and non-fatal; carries the message
/// shown next to the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field: &'static str,
        reason: ValidationReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field,
            reason,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationReason::Empty => "empty",
            ValidationReason::TooShort => "too_short",
            ValidationReason::TooLong => "too_long",
            ValidationReason::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}
