//! Core data model definitions shared across TinyFlix crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod bookmark;
pub mod comment;
pub mod error;
pub mod ids;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use bookmark::Bookmark;
pub use comment::{Comment, Reply};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{BookmarkID, CommentID, ReplyID, VideoID};
pub use video::{MediaSource, Video};
