//! Configuration loading from file system
//!
//! Handles locating and parsing the JSON config file.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::error::UtilHubError;

use super::defaults::{DEFAULT_CONFIG_PATH, ENV_CONFIG_PATH};
use super::types::Config;

/// Location of the config file: `UTILHUB_CONFIG` if set, else ~/.utilhub/config.json
pub fn config_path() -> PathBuf {
    match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(shellexpand::tilde(&path).as_ref()),
        _ => PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref()),
    }
}

/// Load configuration from the default location.
///
/// Returns Config::default() if the file is missing or cannot be parsed.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path.
///
/// A missing file is normal and yields defaults silently. An unreadable or
/// malformed file is logged as a warning and also yields defaults.
#[instrument(name = "load_config")]
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let loaded = std::fs::read_to_string(config_path)
        .map_err(|e| UtilHubError::Config(format!("cannot read file: {}", e)))
        .and_then(|content| parse_config(&content));

    match loaded {
        Ok(config) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %config_path.display(),
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}

/// Parse config JSON, attaching a hint for the common mistakes
fn parse_config(content: &str) -> Result<Config, UtilHubError> {
    serde_json::from_str::<Config>(content).map_err(|e| {
        let hint = if e.is_syntax() || e.is_eof() {
            "check the file is valid JSON (no trailing commas or comments)"
        } else if e.to_string().contains("invalid type") {
            "check field types, e.g. headerLinesToScan must be a number and buildArgs an array of strings"
        } else {
            "check the field values"
        };
        UtilHubError::Config(format!("{} ({})", e, hint))
    })
}
