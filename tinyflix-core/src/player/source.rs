use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tinyflix_model::{MediaSource, VideoID};

/// Identifies one load attempt. Handed out by `select` and `retry`;
/// completions carrying an older ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    pub(crate) generation: u64,
    pub(crate) video_id: VideoID,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn video_id(&self) -> VideoID {
        self.video_id
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.video_id, self.generation)
    }
}

/// Why a single source candidate failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LoadFailure {
    /// Container or codec the media element cannot play; try the next
    /// candidate.
    UnsupportedFormat,
    /// The stream was fetched but could not be decoded; also falls through
    /// to the next candidate.
    Decode(String),
    /// Transport failure. Other candidates come from the same origin, so
    /// this ends the attempt.
    Network(String),
}

impl LoadFailure {
    pub fn allows_fallback(&self) -> bool {
        matches!(self, LoadFailure::UnsupportedFormat | LoadFailure::Decode(_))
    }

    pub(crate) fn into_error(
        self,
        video_id: VideoID,
        source: Option<&MediaSource>,
    ) -> CoreError {
        match self {
            LoadFailure::Network(message) => CoreError::Network(message),
            LoadFailure::UnsupportedFormat => CoreError::Playback {
                video_id,
                message: match source {
                    Some(source) => format!(
                        "no supported source (last tried {})",
                        source.mime_type
                    ),
                    None => "no supported source".to_string(),
                },
            },
            LoadFailure::Decode(message) => {
                CoreError::Playback { video_id, message }
            }
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::UnsupportedFormat => f.write_str("unsupported format"),
            LoadFailure::Decode(message) => {
                write!(f, "decode failed: {message}")
            }
            LoadFailure::Network(message) => {
                write!(f, "network failure: {message}")
            }
        }
    }
}

/// Result of feeding a load completion into the player.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Ticket belongs to an earlier selection; nothing changed.
    Stale,
    /// The player is `Ready`.
    Loaded,
    /// The failed candidate was skipped; load this one next.
    Fallback { index: usize, source: MediaSource },
    /// The binding entered `Error`.
    Failed(CoreError),
}
