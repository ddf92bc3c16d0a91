use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for inline reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,  // Yellow - recoverable, launcher keeps going
    Error,    // Red - the action failed
    Critical, // Red - the launcher cannot start
}

/// Domain-specific errors for UtilHub
#[derive(Error, Debug)]
pub enum UtilHubError {
    #[error("Utilities folder not found: {}", path.display())]
    UtilitiesDirMissing { path: PathBuf },

    #[error("Failed to read metadata from '{}': {source}", path.display())]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Process spawn failed for '{program}': {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open folder '{}': {source}", path.display())]
    FolderOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl UtilHubError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UtilitiesDirMissing { .. } => ErrorSeverity::Critical,
            Self::MetadataRead { .. } => ErrorSeverity::Warning,
            Self::DirectoryRead { .. } => ErrorSeverity::Warning,
            Self::ProcessSpawn { .. } => ErrorSeverity::Error,
            Self::FolderOpen { .. } => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Terminal(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::UtilitiesDirMissing { path } => {
                format!("{} {}", crate::strings::MESSAGE_FOLDER_NOT_FOUND, path.display())
            }
            Self::MetadataRead { path, .. } => format!("Skipped unreadable file {}", path.display()),
            Self::DirectoryRead { path, .. } => format!("Could not list {}", path.display()),
            Self::ProcessSpawn { .. } => crate::strings::MESSAGE_FAILED_TO_START.to_string(),
            Self::FolderOpen { path, .. } => format!(
                "{} {}",
                crate::strings::MESSAGE_COULD_NOT_OPEN_FOLDER,
                path.display()
            ),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Terminal(e) => format!("Terminal failure: {}", e),
        }
    }
}

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user does not need a prompt.
///
/// # Examples
///
/// ```ignore
/// use utilhub::error::ResultExt;
///
/// let config = read_config_file(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
