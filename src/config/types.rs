//! Configuration type definitions
//!
//! This module contains all the struct definitions for configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::*;

// ============================================
// PICKER CONFIG
// ============================================

/// Bounds for the visible window of the utilities list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    /// Fewest rows shown, even for a short catalog (default: 6)
    #[serde(default = "default_min_visible")]
    pub min_visible: usize,
    /// Most rows shown before the list scrolls (default: 12)
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_min_visible() -> usize {
    DEFAULT_MIN_VISIBLE
}
fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            min_visible: DEFAULT_MIN_VISIBLE,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl PickerConfig {
    /// Window size for a catalog of `len` entries: `len` clamped to the bounds.
    ///
    /// Bounds are normalized first (swapped if inverted, never below one row).
    pub fn window_for(&self, len: usize) -> usize {
        let lo = self.min_visible.min(self.max_visible).max(1);
        let hi = self.min_visible.max(self.max_visible).max(1);
        len.clamp(lo, hi)
    }
}

// ============================================
// TOOLCHAIN CONFIG
// ============================================

/// External build/run toolchain invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainConfig {
    /// Program to invoke (default: "dotnet")
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments for the quiet build step; `{file}` is the utility path
    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,
    /// Arguments for the live run step; `{file}` is the utility path
    #[serde(default = "default_run_args")]
    pub run_args: Vec<String>,
}

fn default_program() -> String {
    DEFAULT_TOOLCHAIN_PROGRAM.to_string()
}
fn default_build_args() -> Vec<String> {
    DEFAULT_BUILD_ARGS.iter().map(|s| s.to_string()).collect()
}
fn default_run_args() -> Vec<String> {
    DEFAULT_RUN_ARGS.iter().map(|s| s.to_string()).collect()
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        ToolchainConfig {
            program: default_program(),
            build_args: default_build_args(),
            run_args: default_run_args(),
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// Launcher configuration. Every field is optional; getters apply defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Primary utilities folder; relative paths resolve against the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities_dir: Option<String>,
    /// Glob for utility file names (default: "*.csx")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_pattern: Option<String>,
    /// Lines scanned for header directives (default: 60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_lines_to_scan: Option<usize>,
    /// Disable emoji icons regardless of the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_icons: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picker: Option<PickerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<ToolchainConfig>,
}

impl Config {
    /// Returns the primary utilities folder, resolved against `cwd`.
    /// Defaults to `<cwd>/Utilities`.
    pub fn get_utilities_dir(&self, cwd: &Path) -> PathBuf {
        match self.utilities_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => {
                let expanded = PathBuf::from(shellexpand::tilde(dir).as_ref());
                if expanded.is_absolute() {
                    expanded
                } else {
                    cwd.join(expanded)
                }
            }
            _ => cwd.join(DEFAULT_UTILITIES_DIR),
        }
    }

    /// Returns the file name glob, or DEFAULT_FILE_PATTERN if not configured
    pub fn get_file_pattern(&self) -> &str {
        self.file_pattern
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_FILE_PATTERN)
    }

    /// Returns the header scan window, or DEFAULT_HEADER_LINES_TO_SCAN if not configured
    pub fn get_header_lines_to_scan(&self) -> usize {
        self.header_lines_to_scan
            .unwrap_or(DEFAULT_HEADER_LINES_TO_SCAN)
    }

    /// Returns true if icons were disabled in the config file
    pub fn get_no_icons(&self) -> bool {
        self.no_icons.unwrap_or(false)
    }

    /// Returns the picker bounds, or defaults if not configured
    pub fn get_picker(&self) -> PickerConfig {
        self.picker.clone().unwrap_or_default()
    }

    /// Returns the toolchain invocation, or the dotnet defaults if not configured
    pub fn get_toolchain(&self) -> ToolchainConfig {
        self.toolchain.clone().unwrap_or_default()
    }
}
