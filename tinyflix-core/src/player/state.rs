use serde::{Deserialize, Serialize};
use std::fmt;
use tinyflix_model::VideoID;

/// Playback state machine tag.
///
/// ```text
/// Idle -> Loading -> Ready <-> Playing <-> Paused -> Ended
///            \________\__________\__________\-----> Error
/// ```
///
/// `Error` is left only through an explicit retry or a new selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// No video bound
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Error,
}

impl PlaybackStatus {
    /// States in which the playhead may be moved.
    pub fn can_seek(&self) -> bool {
        !matches!(self, PlaybackStatus::Idle | PlaybackStatus::Loading)
    }

    /// States from which a media failure signal is meaningful.
    pub fn can_fail(&self) -> bool {
        matches!(
            self,
            PlaybackStatus::Loading
                | PlaybackStatus::Ready
                | PlaybackStatus::Playing
                | PlaybackStatus::Paused
        )
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaybackStatus::Idle => "idle",
            PlaybackStatus::Loading => "loading",
            PlaybackStatus::Ready => "ready",
            PlaybackStatus::Playing => "playing",
            PlaybackStatus::Paused => "paused",
            PlaybackStatus::Ended => "ended",
            PlaybackStatus::Error => "in an error state",
        };
        f.write_str(label)
    }
}

/// Snapshot of the player for the currently selected video.
///
/// Invariants: `0 <= current_time <= duration`, `0 <= volume <= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub video_id: Option<VideoID>,
    /// Seconds
    pub current_time: f64,
    /// Seconds
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub rate: f64,
    pub playing: bool,
    pub status: PlaybackStatus,
}

impl PlaybackState {
    pub fn idle(volume: f64) -> Self {
        Self {
            video_id: None,
            current_time: 0.0,
            duration: 0.0,
            volume: volume.clamp(0.0, 1.0),
            muted: false,
            rate: 1.0,
            playing: false,
            status: PlaybackStatus::Idle,
        }
    }

    /// Volume actually heard; muting leaves `volume` untouched.
    pub fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Position as a fraction of the duration (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::idle(1.0)
    }
}
