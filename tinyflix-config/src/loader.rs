use anyhow::{Context, anyhow};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};
use tinyflix_core::config::CoreConfig;
use tracing::{debug, info};

use crate::validation::{ConfigWarnings, apply_guard_rails};

pub const CONFIG_PATH_VAR: &str = "TINYFLIX_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "TINYFLIX_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "tinyflix.toml",
    "tinyflix.json",
    "config/tinyflix.toml",
    "config/tinyflix.json",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "${CONFIG_PATH_VAR} ({})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_VAR}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A loaded, guard-railed configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CoreConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolves `CoreConfig` from the environment and well-known files.
///
/// Evaluation order:
/// 1) `$TINYFLIX_CONFIG_PATH` (TOML or JSON file),
/// 2) `$TINYFLIX_CONFIG_JSON` (inline JSON),
/// 3) the first of `tinyflix.toml`, `tinyflix.json`, `config/tinyflix.toml`,
///    `config/tinyflix.json` that exists under the root,
/// 4) defaults.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the default candidate files are resolved against.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an injected variable lookup.
    pub fn load_with<L>(&self, lookup: L) -> anyhow::Result<ConfigLoad>
    where
        L: Fn(&str) -> Option<String>,
    {
        let (config, source) = self.resolve(&lookup)?;
        let warnings = apply_guard_rails(&config).with_context(|| {
            format!("configuration from {source} failed guard rails")
        })?;

        info!(%source, warnings = warnings.len(), "configuration loaded");
        for warning in &warnings.items {
            debug!(
                message = %warning.message,
                hint = ?warning.hint,
                "configuration warning"
            );
        }

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn resolve<L>(
        &self,
        lookup: &L,
    ) -> anyhow::Result<(CoreConfig, ConfigSource)>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = parse_json(&raw).with_context(|| {
                format!("failed to parse {CONFIG_JSON_VAR}")
            })?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((CoreConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<CoreConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read config from {}", path.display())
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents)
            .with_context(|| format!("invalid config {}", path.display())),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid config {}: {}", path.display(), err)
            })
        }
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> anyhow::Result<CoreConfig> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<CoreConfig> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid config json: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyflix_core::config::PopularityThreshold;

    #[test]
    fn toml_with_tagged_threshold() {
        let raw = r#"
            [player]
            volume_step = 0.05

            [catalog]
            recent_limit = 10
            popular_threshold = { mode = "percentile", value = 90.0 }
        "#;
        let config = parse_from_str(raw, "inline").unwrap();
        assert_eq!(config.player.volume_step, 0.05);
        assert_eq!(config.catalog.recent_limit, Some(10));
        assert_eq!(
            config.catalog.popular_threshold,
            PopularityThreshold::Percentile(90.0)
        );
    }

    #[test]
    fn json_fallback_when_not_toml() {
        let raw = r#"{ "bookmarks": { "duplicate_tolerance_secs": 2.5 } }"#;
        let config = parse_from_str(raw, "inline").unwrap();
        assert_eq!(config.bookmarks.duplicate_tolerance_secs, 2.5);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = parse_from_str("{{ nope", "inline").unwrap_err().to_string();
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }

    #[test]
    fn source_display_names_origin() {
        assert_eq!(ConfigSource::Default.to_string(), "built-in defaults");
        assert_eq!(
            ConfigSource::EnvInline.to_string(),
            "$TINYFLIX_CONFIG_JSON"
        );
    }
}
