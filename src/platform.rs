//! OS integration
//!
//! Opening a folder in the native file browser: Explorer on Windows, Finder
//! (`open`) on macOS, `xdg-open` elsewhere.

use std::path::Path;
use tracing::{info, instrument};

use crate::error::UtilHubError;

/// Something that can show a folder to the user
pub trait FolderOpener {
    fn open_folder(&self, path: &Path) -> Result<(), UtilHubError>;
}

/// Opens folders with the system default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl FolderOpener for SystemOpener {
    #[instrument(level = "debug", skip(self))]
    fn open_folder(&self, path: &Path) -> Result<(), UtilHubError> {
        open::that(path).map_err(|source| UtilHubError::FolderOpen {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Opened folder in file browser");
        Ok(())
    }
}
