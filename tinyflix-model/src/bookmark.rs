use crate::ids::{BookmarkID, VideoID};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named pointer to a playback position within a video.
///
/// `timestamp_seconds` is the playhead at the moment the bookmark was
/// created and never follows the live position afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bookmark {
    pub id: BookmarkID,
    pub video_id: VideoID,
    pub timestamp_seconds: f64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}
