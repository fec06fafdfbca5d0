//! Configuration loading for TinyFlix.
//!
//! Resolves [`CoreConfig`] from environment variables, TOML or JSON files,
//! or built-in defaults, then runs guard rails that reject unusable values
//! and collect warnings for questionable ones.
#![allow(missing_docs)]

pub mod loader;
pub mod validation;

pub use loader::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigLoad, ConfigLoader, ConfigSource,
    load_from_file, parse_from_str, parse_json,
};
pub use tinyflix_core::config::CoreConfig;
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
