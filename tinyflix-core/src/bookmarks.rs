//! Per-video bookmarks.

use std::collections::HashMap;

use chrono::Utc;
use tinyflix_model::{Bookmark, BookmarkID, VideoID};
use tracing::{debug, info};

use crate::accessibility::FocusManager;
use crate::config::BookmarkConfig;
use crate::error::{CoreError, Result};
use crate::format::format_time;
use crate::player::PlayerController;

/// Append-only bookmark collection, scoped by video.
///
/// Each video's list keeps creation order. Activating a bookmark seeks the
/// player; it never reaches into the player's state any other way.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    config: BookmarkConfig,
    by_video: HashMap<VideoID, Vec<Bookmark>>,
    index: HashMap<BookmarkID, VideoID>,
}

impl BookmarkStore {
    pub fn new(config: BookmarkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Snapshot `current_time` as a new bookmark on `video_id`.
    ///
    /// A blank or missing label falls back to the formatted timestamp.
    pub fn add(
        &mut self,
        video_id: VideoID,
        current_time: f64,
        label: Option<&str>,
    ) -> Result<Bookmark> {
        let label = match custom_label(label) {
            Some(label) => label,
            None => format!("Bookmark at {}", format_time(current_time)?),
        };
        self.insert(video_id, current_time, label)
    }

    /// Bookmark the player's current position on its bound video.
    ///
    /// The default label names the video, e.g. `"Big Buck Bunny @ 0:45"`.
    pub fn add_at_playhead<F: FocusManager>(
        &mut self,
        player: &PlayerController<F>,
        label: Option<&str>,
    ) -> Result<Bookmark> {
        let Some(video) = player.video() else {
            return Err(CoreError::InvalidState {
                operation: "add a bookmark",
                status: player.status(),
            });
        };
        let current_time = player.current_time();
        let label = match custom_label(label) {
            Some(label) => label,
            None => format!("{} @ {}", video.title, format_time(current_time)?),
        };
        self.insert(video.id, current_time, label)
    }

    /// Seek `player` to the bookmark. Returns the position reached.
    pub fn activate<F: FocusManager>(
        &self,
        bookmark_id: BookmarkID,
        player: &mut PlayerController<F>,
    ) -> Result<f64> {
        let bookmark = self
            .get(bookmark_id)
            .ok_or_else(|| CoreError::not_found("Bookmark", bookmark_id))?;

        if player.video_id() != Some(bookmark.video_id) {
            return Err(CoreError::WrongVideo {
                expected: bookmark.video_id,
                bound: player.video_id(),
            });
        }

        let reached = player.seek(bookmark.timestamp_seconds)?;
        debug!(%bookmark_id, reached, "bookmark activated");
        Ok(reached)
    }

    /// Bookmarks for `video_id` in creation order.
    pub fn list(&self, video_id: VideoID) -> &[Bookmark] {
        self.by_video
            .get(&video_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, bookmark_id: BookmarkID) -> Option<&Bookmark> {
        let video_id = self.index.get(&bookmark_id)?;
        self.by_video
            .get(video_id)?
            .iter()
            .find(|bookmark| bookmark.id == bookmark_id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn insert(
        &mut self,
        video_id: VideoID,
        current_time: f64,
        label: String,
    ) -> Result<Bookmark> {
        if !current_time.is_finite() || current_time < 0.0 {
            return Err(CoreError::Precondition(format!(
                "bookmark time must be a finite, non-negative number of \
                 seconds (got {current_time})"
            )));
        }

        let tolerance = self.config.duplicate_tolerance_secs;
        if let Some(existing) = self.list(video_id).iter().find(|bookmark| {
            let gap = (bookmark.timestamp_seconds - current_time).abs();
            tolerance > 0.0 && gap < tolerance
        }) {
            debug!(
                %video_id,
                existing = %existing.id,
                current_time,
                "rejected duplicate bookmark"
            );
            return Err(CoreError::DuplicateBookmark {
                existing: existing.id,
                timestamp_seconds: existing.timestamp_seconds,
            });
        }

        let bookmark = Bookmark {
            id: BookmarkID::new(),
            video_id,
            timestamp_seconds: current_time,
            label,
            created_at: Utc::now(),
        };
        self.by_video.entry(video_id).or_default().push(bookmark.clone());
        self.index.insert(bookmark.id, video_id);
        info!(
            %video_id,
            bookmark_id = %bookmark.id,
            current_time,
            "bookmark added"
        );
        Ok(bookmark)
    }
}

fn custom_label(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}
