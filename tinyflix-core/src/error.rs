use crate::accessibility::Announcement;
use crate::player::state::PlaybackStatus;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyflix_model::{BookmarkID, VideoID};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Video could not be played: {message}")]
    Playback { video_id: VideoID, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("A bookmark already exists at {timestamp_seconds:.0}s")]
    DuplicateBookmark {
        existing: BookmarkID,
        timestamp_seconds: f64,
    },

    #[error("Cannot {operation} while the player is {status}")]
    InvalidState {
        operation: &'static str,
        status: PlaybackStatus,
    },

    #[error(
        "Bookmark belongs to video {expected}, but the player is bound to \
         {bound:?}"
    )]
    WrongVideo {
        expected: VideoID,
        bound: Option<VideoID>,
    },

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Coarse error category consumed by presentation layers and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Playback,
    Network,
    DuplicateBookmark,
    InvalidState,
    Precondition,
    NotFound,
}

/// Everything a presentation layer needs to render an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPresentation {
    pub kind: ErrorKind,
    pub message: String,
    pub is_retryable: bool,
    pub announce: Announcement,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::Playback { .. } => ErrorKind::Playback,
            CoreError::Network(_) => ErrorKind::Network,
            CoreError::DuplicateBookmark { .. } => ErrorKind::DuplicateBookmark,
            CoreError::InvalidState { .. } | CoreError::WrongVideo { .. } => {
                ErrorKind::InvalidState
            }
            CoreError::Precondition(_) => ErrorKind::Precondition,
            CoreError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Only media and transport failures can succeed on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::Playback { .. } | CoreError::Network(_))
    }

    /// Playback and network failures interrupt the viewer; everything else
    /// is announced politely next to the control that caused it.
    pub fn announcement(&self) -> Announcement {
        if self.is_retryable() {
            Announcement::Assertive
        } else {
            Announcement::Polite
        }
    }

    pub fn presentation(&self) -> ErrorPresentation {
        ErrorPresentation {
            kind: self.kind(),
            message: self.to_string(),
            is_retryable: self.is_retryable(),
            announce: self.announcement(),
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationReason;

    #[test]
    fn playback_errors_are_retryable_and_assertive() {
        let err = CoreError::Playback {
            video_id: VideoID::new(),
            message: "decoder rejected stream".into(),
        };
        let view = err.presentation();
        assert_eq!(view.kind, ErrorKind::Playback);
        assert!(view.is_retryable);
        assert_eq!(view.announce, Announcement::Assertive);
        assert!(view.message.contains("decoder rejected stream"));
    }

    #[test]
    fn network_errors_are_retryable() {
        let err = CoreError::Network("connection reset".into());
        assert!(err.is_retryable());
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn validation_errors_keep_field_message() {
        let err: CoreError = ValidationError::new(
            "comment",
            ValidationReason::Empty,
            "Comment cannot be empty",
        )
        .into();
        let view = err.presentation();
        assert_eq!(view.kind, ErrorKind::Validation);
        assert_eq!(view.message, "Comment cannot be empty");
        assert!(!view.is_retryable);
        assert_eq!(view.announce, Announcement::Polite);
    }

    #[test]
    fn wrong_video_is_reported_as_invalid_state() {
        let err = CoreError::WrongVideo {
            expected: VideoID::new(),
            bound: None,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(!err.is_retryable());
    }
}
