use thiserror::Error;
use tinyflix_core::config::{CoreConfig, PopularityThreshold};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("player.supported_rates must not be empty")]
    NoPlaybackRates,
    #[error("player.supported_rates must include normal speed (1.0)")]
    MissingNormalRate,
    #[error("player.supported_rates contains an invalid rate {rate}")]
    InvalidRate { rate: f64 },
    #[error("{field} must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reject configurations the core cannot run with and collect warnings for
/// ones that run but probably do not do what was meant.
pub fn apply_guard_rails(
    config: &CoreConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let player = &config.player;
    if player.supported_rates.is_empty() {
        return Err(ConfigGuardRailError::NoPlaybackRates);
    }
    if let Some(rate) = player
        .supported_rates
        .iter()
        .copied()
        .find(|rate| !rate.is_finite() || *rate <= 0.0)
    {
        return Err(ConfigGuardRailError::InvalidRate { rate });
    }
    if !player.supports_rate(1.0) {
        return Err(ConfigGuardRailError::MissingNormalRate);
    }
    let mut rates = player.supported_rates.clone();
    rates.sort_by(f64::total_cmp);
    rates.dedup();
    if rates.len() != player.supported_rates.len() {
        warnings
            .push("player.supported_rates lists the same rate more than once");
    }

    in_range("player.default_volume", player.default_volume, 0.0, 1.0)?;
    if player.default_volume == 0.0 {
        warnings.push_with_hint(
            "player.default_volume is 0; videos start silent",
            "Use mute for silence and keep default_volume above 0",
        );
    }

    positive("player.volume_step", player.volume_step)?;
    in_range("player.volume_step", player.volume_step, 0.0, 1.0)?;
    positive("player.seek_step_secs", player.seek_step_secs)?;
    if player.seek_step_secs > 60.0 {
        warnings.push_with_hint(
            format!(
                "player.seek_step_secs is {}s; arrow keys skip large spans",
                player.seek_step_secs
            ),
            "Typical values are 5 to 10 seconds",
        );
    }

    let tolerance = config.bookmarks.duplicate_tolerance_secs;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigGuardRailError::OutOfRange {
            field: "bookmarks.duplicate_tolerance_secs",
            value: tolerance,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    if tolerance > 10.0 {
        warnings.push(format!(
            "bookmarks.duplicate_tolerance_secs is {tolerance}s; \
             nearby bookmarks will be rejected"
        ));
    }

    let catalog = &config.catalog;
    if let PopularityThreshold::Percentile(p) = catalog.popular_threshold {
        in_range("catalog.popular_threshold.value", p, 0.0, 100.0)?;
        if p >= 100.0 {
            warnings.push_with_hint(
                "catalog.popular_threshold at the 100th percentile; \
                 popular will always be empty",
                "Use a percentile below 100 or an `at_least` threshold",
            );
        }
    }
    for (field, limit) in [
        ("catalog.recent_limit", catalog.recent_limit),
        ("catalog.popular_limit", catalog.popular_limit),
    ] {
        if limit == Some(0) {
            warnings.push_with_hint(
                format!("{field} is 0; the filter will return nothing"),
                "Remove the field to leave the filter uncapped",
            );
        }
    }

    Ok(warnings)
}

fn in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConfigGuardRailError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigGuardRailError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn positive(
    field: &'static str,
    value: f64,
) -> Result<(), ConfigGuardRailError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigGuardRailError::NonPositive { field, value })
    }
}
