//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Folder (relative to the working directory) holding the utilities
pub const DEFAULT_UTILITIES_DIR: &str = "Utilities";

/// File name pattern for utility files, matched non-recursively
pub const DEFAULT_FILE_PATTERN: &str = "*.csx";

/// How many lines at the top of a file are scanned for header directives
pub const DEFAULT_HEADER_LINES_TO_SCAN: usize = 60;

/// Bounds for the number of visible rows in the utilities list
pub const DEFAULT_MIN_VISIBLE: usize = 6;
pub const DEFAULT_MAX_VISIBLE: usize = 12;

/// Build/run toolchain. `{file}` is replaced with the utility path.
pub const DEFAULT_TOOLCHAIN_PROGRAM: &str = "dotnet";
pub const DEFAULT_BUILD_ARGS: &[&str] = &["build", "--file", "{file}", "-v:q"];
pub const DEFAULT_RUN_ARGS: &[&str] = &["run", "--no-build", "--file", "{file}"];

/// Placeholder substituted with the utility path in toolchain arguments
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "~/.utilhub/config.json";

/// Environment variables
pub const ENV_CONFIG_PATH: &str = "UTILHUB_CONFIG";
pub const ENV_NO_EMOJI: &str = "UTILHUB_NO_EMOJI";
