use crate::error::{ModelError, Result};
use crate::ids::VideoID;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest rating a catalog entry may carry.
pub const MAX_RATING: f32 = 5.0;

/// One playable rendition of a video.
///
/// A video lists several of these in preference order; the player falls
/// back to the next candidate when the current one cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MediaSource {
    pub url: String,
    /// MIME type such as `video/webm` or `video/mp4`
    pub mime_type: String,
}

impl MediaSource {
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Immutable catalog entry.
///
/// Created when the catalog is loaded and never mutated by the core; the
/// `with_*` helpers exist for loaders and fixtures that assemble entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Video {
    pub id: VideoID,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: BTreeSet<String>,
    /// Total length in seconds
    pub duration_seconds: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub view_count: u64,
    /// Average rating in `0.0..=5.0`
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f32,
    pub published_at: DateTime<Utc>,
    /// Playable renditions, most preferred first
    #[cfg_attr(feature = "serde", serde(default))]
    pub sources: Vec<MediaSource>,
}

impl Video {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: VideoID::new(),
            title: title.into(),
            description: String::new(),
            tags: BTreeSet::new(),
            duration_seconds: 0.0,
            view_count: 0,
            rating: 0.0,
            published_at: Utc::now(),
            sources: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: VideoID) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn with_views(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    pub fn with_source(mut self, source: MediaSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Check the catalog invariants: finite non-negative duration and a
    /// rating inside `0..=5`.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::InvalidVideo(format!(
                "video {} has an empty title",
                self.id
            )));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(ModelError::InvalidVideo(format!(
                "video {} has invalid duration {}",
                self.id, self.duration_seconds
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(ModelError::InvalidVideo(format!(
                "video {} has rating {} outside 0-{}",
                self.id, self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}
