//! Playback state machine.
//!
//! [`PlayerController`] owns the [`PlaybackState`] for the selected video.
//! Media work happens elsewhere: the host feeds load completions, clock
//! ticks, and failures back in, tagged with the [`LoadTicket`] handed out
//! by [`PlayerController::select`]. Tickets from an earlier selection are
//! dropped, so a slow load for video A can never flip video B to `Ready`.

pub mod loader;
pub mod source;
pub mod state;

pub use loader::{LoadAttemptFailure, LoadPlan, LoadReport, MediaLoader};
pub use source::{LoadFailure, LoadOutcome, LoadTicket};
pub use state::{PlaybackState, PlaybackStatus};

use serde::{Deserialize, Serialize};
use tinyflix_model::{MediaSource, Video, VideoID};
use tracing::{debug, info, warn};

use crate::accessibility::{FocusManager, FocusTarget, NoFocus, RangeAria};
use crate::config::PlayerConfig;
use crate::error::{CoreError, ErrorPresentation, Result};
use crate::format::format_time;
use crate::validation::{ValidationError, ValidationReason};

/// Direction of a keyboard step on a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Up => 1.0,
            StepDirection::Down => -1.0,
        }
    }
}

/// Formatted position and duration, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTime {
    pub position: String,
    pub duration: String,
}

#[derive(Debug)]
pub struct PlayerController<F: FocusManager = NoFocus> {
    config: PlayerConfig,
    state: PlaybackState,
    video: Option<Video>,
    generation: u64,
    source_index: usize,
    error: Option<CoreError>,
    focus: F,
}

impl PlayerController<NoFocus> {
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_focus(config, NoFocus)
    }
}

impl Default for PlayerController<NoFocus> {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl<F: FocusManager> PlayerController<F> {
    pub fn with_focus(config: PlayerConfig, focus: F) -> Self {
        let state = PlaybackState::idle(config.default_volume);
        Self {
            config,
            state,
            video: None,
            generation: 0,
            source_index: 0,
            error: None,
            focus,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    pub fn video_id(&self) -> Option<VideoID> {
        self.state.video_id
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Error that put the binding into `Error`, if any.
    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }

    pub fn error_presentation(&self) -> Option<ErrorPresentation> {
        self.error.as_ref().map(CoreError::presentation)
    }

    pub fn focus(&self) -> &F {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut F {
        &mut self.focus
    }

    /// Ticket for the current generation, if a video is bound.
    pub fn ticket(&self) -> Option<LoadTicket> {
        self.state.video_id.map(|video_id| LoadTicket {
            generation: self.generation,
            video_id,
        })
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.generation == ticket.generation
            && self.state.video_id == Some(ticket.video_id)
    }

    /// Candidate currently being loaded or played.
    pub fn current_source(&self) -> Option<&MediaSource> {
        self.video
            .as_ref()
            .and_then(|video| video.sources.get(self.source_index))
    }

    /// Bind to `video` and start loading it. Any load still in flight for a
    /// previous selection becomes stale.
    pub fn select(&mut self, video: &Video) -> LoadTicket {
        self.generation += 1;
        self.source_index = 0;
        self.error = None;
        self.video = Some(video.clone());
        self.state = PlaybackState {
            video_id: Some(video.id),
            current_time: 0.0,
            duration: video.duration_seconds.max(0.0),
            volume: self.state.volume,
            muted: self.state.muted,
            rate: self.state.rate,
            playing: false,
            status: PlaybackStatus::Loading,
        };
        info!(
            video_id = %video.id,
            generation = self.generation,
            title = %video.title,
            "video selected"
        );
        self.focus.move_focus_to(FocusTarget::Player);
        LoadTicket {
            generation: self.generation,
            video_id: video.id,
        }
    }

    pub fn play(&mut self) -> Result<()> {
        match self.state.status {
            PlaybackStatus::Ready | PlaybackStatus::Paused => {}
            PlaybackStatus::Ended => {
                self.state.current_time = 0.0;
            }
            PlaybackStatus::Playing => return Ok(()),
            status => return Err(self.invalid("play", status)),
        }
        self.transition(PlaybackStatus::Playing);
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        match self.state.status {
            PlaybackStatus::Playing => {
                self.transition(PlaybackStatus::Paused);
                Ok(())
            }
            PlaybackStatus::Ready
            | PlaybackStatus::Paused
            | PlaybackStatus::Ended => Ok(()),
            status => Err(self.invalid("pause", status)),
        }
    }

    /// Keyboard activation of the play/pause button.
    pub fn toggle_playback(&mut self) -> Result<PlaybackStatus> {
        if self.state.playing {
            self.pause()?;
        } else {
            self.play()?;
        }
        Ok(self.state.status)
    }

    /// Move the playhead. Returns the clamped position.
    pub fn seek(&mut self, seconds: f64) -> Result<f64> {
        if seconds.is_nan() {
            return Err(CoreError::Precondition(
                "seek target must be a number".into(),
            ));
        }
        let status = self.state.status;
        if !status.can_seek() {
            return Err(self.invalid("seek", status));
        }

        let target = seconds.clamp(0.0, self.state.duration);
        self.state.current_time = target;
        if status == PlaybackStatus::Ended && target < self.state.duration {
            self.transition(PlaybackStatus::Paused);
        }
        debug!(video_id = ?self.state.video_id, target, "seek");
        Ok(target)
    }

    /// Arrow-key stepping on the progress bar.
    pub fn seek_relative(&mut self, delta_seconds: f64) -> Result<f64> {
        self.seek(self.state.current_time + delta_seconds)
    }

    pub fn step_seek(&mut self, direction: StepDirection) -> Result<f64> {
        self.seek_relative(direction.sign() * self.config.seek_step_secs)
    }

    /// Returns the clamped volume.
    pub fn set_volume(&mut self, volume: f64) -> Result<f64> {
        if volume.is_nan() {
            return Err(CoreError::Precondition(
                "volume must be a number".into(),
            ));
        }
        self.state.volume = volume.clamp(0.0, 1.0);
        Ok(self.state.volume)
    }

    /// Arrow-key stepping on the volume slider.
    pub fn step_volume(&mut self, direction: StepDirection) -> Result<f64> {
        let next =
            self.state.volume + direction.sign() * self.config.volume_step;
        // Snap to the step grid so ten presses from 0.0 land on exactly 1.0
        let snapped = (next * 1000.0).round() / 1000.0;
        self.set_volume(snapped)
    }

    /// Returns the new `muted` flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.state.muted = !self.state.muted;
        debug!(
            muted = self.state.muted,
            volume = self.state.volume,
            "mute toggled"
        );
        self.state.muted
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<()> {
        if !self.config.supports_rate(rate) {
            return Err(ValidationError::new(
                "rate",
                ValidationReason::Unsupported,
                format!("Playback rate {rate}x is not supported"),
            )
            .into());
        }
        self.state.rate = rate;
        Ok(())
    }

    /// The media element reported a fatal error for the current binding.
    /// Returns the error now surfaced to the viewer.
    pub fn on_media_error(
        &mut self,
        message: impl Into<String>,
    ) -> Result<CoreError> {
        let status = self.state.status;
        let bound = self.state.video_id.filter(|_| status.can_fail());
        let Some(video_id) = bound else {
            return Err(self.invalid("report a media error", status));
        };
        let error = CoreError::Playback {
            video_id,
            message: message.into(),
        };
        self.fail(error.clone());
        Ok(error)
    }

    /// Re-enter `Loading` for the bound video after an error. The position
    /// reached before the failure is kept.
    pub fn retry(&mut self) -> Result<LoadTicket> {
        let status = self.state.status;
        let failed = self
            .state
            .video_id
            .filter(|_| status == PlaybackStatus::Error);
        let Some(video_id) = failed else {
            return Err(self.invalid("retry", status));
        };

        self.generation += 1;
        self.source_index = 0;
        self.error = None;
        self.transition(PlaybackStatus::Loading);
        info!(%video_id, generation = self.generation, "retrying playback");
        self.focus.move_focus_to(FocusTarget::Player);
        Ok(LoadTicket {
            generation: self.generation,
            video_id,
        })
    }

    /// The current candidate finished loading.
    pub fn on_loaded(&mut self, ticket: LoadTicket) -> LoadOutcome {
        if !self.accepts(&ticket, "load completion") {
            return LoadOutcome::Stale;
        }
        if self.state.status != PlaybackStatus::Loading {
            debug!(
                %ticket,
                status = %self.state.status,
                "load completion outside loading"
            );
            return LoadOutcome::Stale;
        }
        self.transition(PlaybackStatus::Ready);
        LoadOutcome::Loaded
    }

    /// The current candidate failed. Format and decode failures advance to
    /// the next candidate; anything else, or running out of candidates,
    /// ends in `Error`.
    pub fn on_load_failed(
        &mut self,
        ticket: LoadTicket,
        failure: LoadFailure,
    ) -> LoadOutcome {
        if !self.accepts(&ticket, "load failure") {
            return LoadOutcome::Stale;
        }
        if self.state.status != PlaybackStatus::Loading {
            debug!(
                %ticket,
                status = %self.state.status,
                "load failure outside loading"
            );
            return LoadOutcome::Stale;
        }

        if failure.allows_fallback() {
            let next = self.source_index + 1;
            if let Some(source) = self
                .video
                .as_ref()
                .and_then(|video| video.sources.get(next))
                .cloned()
            {
                debug!(
                    %ticket,
                    %failure,
                    next,
                    url = %source.url,
                    "falling back to next source"
                );
                self.source_index = next;
                return LoadOutcome::Fallback {
                    index: next,
                    source,
                };
            }
        }

        let error = failure.into_error(ticket.video_id, self.current_source());
        self.fail(error.clone());
        LoadOutcome::Failed(error)
    }

    /// Media clock tick. Returns `false` when the tick was ignored.
    pub fn on_time_update(&mut self, ticket: LoadTicket, seconds: f64) -> bool {
        if !self.accepts(&ticket, "time update") || seconds.is_nan() {
            return false;
        }
        if !matches!(
            self.state.status,
            PlaybackStatus::Playing
                | PlaybackStatus::Paused
                | PlaybackStatus::Ready
        ) {
            return false;
        }

        self.state.current_time = seconds.clamp(0.0, self.state.duration);
        let at_end = self.state.current_time >= self.state.duration;
        if self.state.playing && at_end {
            self.transition(PlaybackStatus::Ended);
        }
        true
    }

    /// End-of-media signal from the element.
    pub fn on_ended(&mut self) -> Result<()> {
        match self.state.status {
            PlaybackStatus::Ready
            | PlaybackStatus::Playing
            | PlaybackStatus::Paused => {
                self.state.current_time = self.state.duration;
                self.transition(PlaybackStatus::Ended);
                Ok(())
            }
            PlaybackStatus::Ended => Ok(()),
            status => Err(self.invalid("end playback", status)),
        }
    }

    /// Snapshot of the remaining candidates for the current generation.
    pub fn load_plan(&self) -> Result<LoadPlan> {
        let status = self.state.status;
        let loading = status == PlaybackStatus::Loading;
        match (self.ticket(), &self.video) {
            (Some(ticket), Some(video)) if loading => Ok(LoadPlan {
                ticket,
                sources: video.sources.clone(),
                start: self.source_index,
            }),
            _ => Err(self.invalid("load", status)),
        }
    }

    /// Apply the result of a [`LoadPlan`] run. Reports for an older
    /// generation are discarded.
    pub fn apply_load(&mut self, report: LoadReport) -> LoadOutcome {
        if !self.accepts(&report.ticket, "load report") {
            return LoadOutcome::Stale;
        }
        if self.state.status != PlaybackStatus::Loading {
            return LoadOutcome::Stale;
        }
        match report.result {
            Ok(index) => {
                self.source_index = index;
                self.on_loaded(report.ticket)
            }
            Err(attempt) => {
                if let Some(index) = attempt.index {
                    self.source_index = index;
                }
                let error = attempt
                    .failure
                    .into_error(report.ticket.video_id, self.current_source());
                self.fail(error.clone());
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Load the bound video through `loader`, trying candidates in order.
    pub async fn load<L>(&mut self, loader: &L) -> Result<LoadOutcome>
    where
        L: MediaLoader + ?Sized,
    {
        let plan = self.load_plan()?;
        let report = plan.run(loader).await;
        Ok(self.apply_load(report))
    }

    pub fn display_time(&self) -> Result<DisplayTime> {
        Ok(DisplayTime {
            position: format_time(self.state.current_time)?,
            duration: format_time(self.state.duration)?,
        })
    }

    pub fn volume_aria(&self) -> RangeAria {
        let text = if self.state.muted {
            "Muted".to_string()
        } else {
            format!("{}%", (self.state.volume * 100.0).round() as u32)
        };
        RangeAria {
            min: 0.0,
            max: 1.0,
            now: self.state.volume,
            text,
        }
    }

    /// Attributes for the progress slider, e.g. `"0:45 of 10:00"`.
    pub fn progress_aria(&self) -> Result<RangeAria> {
        let display = self.display_time()?;
        Ok(RangeAria {
            min: 0.0,
            max: self.state.duration,
            now: self.state.current_time,
            text: format!("{} of {}", display.position, display.duration),
        })
    }

    fn accepts(&self, ticket: &LoadTicket, what: &'static str) -> bool {
        if self.is_current(ticket) {
            return true;
        }
        debug!(
            %ticket,
            current_generation = self.generation,
            "dropping stale {what}"
        );
        false
    }

    fn transition(&mut self, to: PlaybackStatus) {
        let from = self.state.status;
        self.state.status = to;
        self.state.playing = to == PlaybackStatus::Playing;
        debug!(
            video_id = ?self.state.video_id,
            %from,
            %to,
            "playback transition"
        );
    }

    fn fail(&mut self, error: CoreError) {
        warn!(video_id = ?self.state.video_id, %error, "playback failed");
        self.transition(PlaybackStatus::Error);
        self.error = Some(error);
        self.focus.move_focus_to(FocusTarget::ErrorAlert);
    }

    fn invalid(
        &self,
        operation: &'static str,
        status: PlaybackStatus,
    ) -> CoreError {
        debug!(operation, %status, "rejected player operation");
        CoreError::InvalidState { operation, status }
    }
}
