//! Accessibility data exposed by the core.
//!
//! Nothing here renders anything. These are the values a presentation layer
//! copies into ARIA attributes, live regions, and focus calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a live region should announce a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Announcement {
    /// Interrupts the screen reader (`role="alert"`)
    Assertive,
    /// Waits for a pause (`role="status"`)
    Polite,
}

impl Announcement {
    /// Value for `aria-live`
    pub fn aria_live(&self) -> &'static str {
        match self {
            Announcement::Assertive => "assertive",
            Announcement::Polite => "polite",
        }
    }

    /// Value for `role`
    pub fn role(&self) -> &'static str {
        match self {
            Announcement::Assertive => "alert",
            Announcement::Polite => "status",
        }
    }
}

/// Attributes of a range control (`aria-valuemin`, `aria-valuemax`,
/// `aria-valuenow`, `aria-valuetext`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeAria {
    pub min: f64,
    pub max: f64,
    pub now: f64,
    pub text: String,
}

/// Regions of the page the core may ask to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// The video surface and its controls
    Player,
    /// The live region that carries the current playback error
    ErrorAlert,
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FocusTarget::Player => "player",
            FocusTarget::ErrorAlert => "error-alert",
        };
        f.write_str(label)
    }
}

/// Focus management seam implemented by the presentation layer.
///
/// The core states where focus should go; it never inspects which element
/// currently holds focus.
pub trait FocusManager: fmt::Debug {
    fn move_focus_to(&mut self, target: FocusTarget);
}

/// Focus manager for headless use; drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFocus;

impl FocusManager for NoFocus {
    fn move_focus_to(&mut self, _target: FocusTarget) {}
}

/// Keeps every focus request in order. Useful for headless hosts and tests
/// that assert on focus movement.
#[derive(Debug, Default, Clone)]
pub struct FocusLog {
    pub moves: Vec<FocusTarget>,
}

impl FocusLog {
    pub fn last(&self) -> Option<FocusTarget> {
        self.moves.last().copied()
    }
}

impl FocusManager for FocusLog {
    fn move_focus_to(&mut self, target: FocusTarget) {
        self.moves.push(target);
    }
}
