use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{ValidationError, ValidationReason};

pub const MIN_TEXT_CHARS: usize = 3;
pub const MAX_TEXT_CHARS: usize = 500;

/// What a piece of text is being validated as. Only changes the wording of
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Comment,
    Reply,
}

impl TextKind {
    fn field(self) -> &'static str {
        match self {
            TextKind::Comment => "comment",
            TextKind::Reply => "reply",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            TextKind::Comment => "Comment",
            TextKind::Reply => "Reply",
        }
    }
}

/// Comment or reply body with validation
///
/// - Surrounding whitespace is trimmed
/// - 3 to 500 characters after trimming, counted as Unicode scalar values
/// - Interior formatting is preserved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(
        kind: TextKind,
        text: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        let chars = text.chars().count();
        let noun = kind.noun();

        if chars == 0 {
            return Err(ValidationError::new(
                kind.field(),
                ValidationReason::Empty,
                format!("{noun} cannot be empty"),
            ));
        }

        if chars < MIN_TEXT_CHARS {
            return Err(ValidationError::new(
                kind.field(),
                ValidationReason::TooShort,
                format!("{noun} must be at least {MIN_TEXT_CHARS} characters"),
            ));
        }

        if chars > MAX_TEXT_CHARS {
            return Err(ValidationError::new(
                kind.field(),
                ValidationReason::TooLong,
                format!("{noun} must be less than {MAX_TEXT_CHARS} characters"),
            ));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
