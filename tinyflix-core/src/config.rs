use serde::{Deserialize, Serialize};

/// Global knobs that tune core behaviour.
///
/// All fields carry defaults so a configuration file only needs to name the
/// values it changes.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CoreConfig {
    /// Playback rates, volume and keyboard stepping.
    pub player: PlayerConfig,
    /// Duplicate detection for bookmarks.
    pub bookmarks: BookmarkConfig,
    /// Thresholds and caps for catalog filters.
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Rates offered by the speed selector. `set_rate` rejects anything else.
    pub supported_rates: Vec<f64>,
    /// Volume applied before the listener touches the control.
    pub default_volume: f64,
    /// Amount one arrow-key press moves the volume slider.
    pub volume_step: f64,
    /// Seconds one arrow-key press moves the progress bar.
    pub seek_step_secs: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            supported_rates: vec![0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
            default_volume: 1.0,
            volume_step: 0.1,
            seek_step_secs: 5.0,
        }
    }
}

impl PlayerConfig {
    pub fn supports_rate(&self, rate: f64) -> bool {
        self.supported_rates
            .iter()
            .any(|supported| (supported - rate).abs() < f64::EPSILON)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookmarkConfig {
    /// A new bookmark closer than this to an existing one on the same video
    /// is rejected. `0.0` allows exact duplicates.
    pub duplicate_tolerance_secs: f64,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            duplicate_tolerance_secs: 1.0,
        }
    }
}

/// Cut-off used by the `popular` filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum PopularityThreshold {
    /// Views must exceed the median of the filtered input.
    Median,
    /// Views must exceed the given percentile (0-100) of the filtered input.
    Percentile(f64),
    /// Views must be at least this absolute count.
    AtLeast(u64),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub popular_threshold: PopularityThreshold,
    /// Maximum number of results for `recent`. `None` returns everything.
    pub recent_limit: Option<usize>,
    /// Maximum number of results for `popular`. `None` returns everything.
    pub popular_limit: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            popular_threshold: PopularityThreshold::Median,
            recent_limit: None,
            popular_limit: None,
        }
    }
}
