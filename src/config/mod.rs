//! Configuration module - launcher settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.utilhub/config.json (or `UTILHUB_CONFIG`)
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, PickerConfig, etc.)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_FILE_PATTERN, DEFAULT_HEADER_LINES_TO_SCAN, DEFAULT_MAX_VISIBLE, DEFAULT_MIN_VISIBLE,
    ENV_NO_EMOJI, FILE_PLACEHOLDER,
};

pub use types::{Config, PickerConfig, ToolchainConfig};

pub use loader::{config_path, load_config, load_config_from};

#[cfg(test)]
pub use defaults::{DEFAULT_BUILD_ARGS, DEFAULT_RUN_ARGS, DEFAULT_TOOLCHAIN_PROGRAM};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
