//! Launcher session
//!
//! One session is: check the utilities folder, then loop over
//! load -> picker -> action menu -> action until the user exits.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use crate::actions::{choose_action, dispatch, ActionContext, Flow};
use crate::config::Config;
use crate::error::UtilHubError;
use crate::executor::BuildRunHarness;
use crate::icons::IconMode;
use crate::logging;
use crate::platform::FolderOpener;
use crate::strings;
use crate::tui::{self, EventSource, PickerView, Screen, Tone};
use crate::utilities::{load_catalog, LoadOptions, LoadReport};

/// Normal exit: Exit action, Escape in the picker, or an acknowledged empty list
pub const EXIT_OK: u8 = 0;
/// The primary utilities folder does not exist
pub const EXIT_MISSING_DIR: u8 = 1;

/// The terminal and the external collaborators a session talks to
pub struct Session<'a> {
    pub screen: &'a mut Screen,
    pub events: &'a mut dyn EventSource,
    pub harness: &'a mut dyn BuildRunHarness,
    pub opener: &'a dyn FolderOpener,
}

pub struct Launcher {
    config: Config,
    utilities_dir: PathBuf,
    extra_dir: Option<PathBuf>,
    icons: IconMode,
}

impl Launcher {
    /// `cwd` anchors a relative `utilitiesDir`; `extra_dir` comes from the
    /// command line.
    pub fn new(config: Config, cwd: &Path, extra_dir: Option<PathBuf>, icons: IconMode) -> Self {
        let utilities_dir = config.get_utilities_dir(cwd);
        Launcher {
            config,
            utilities_dir,
            extra_dir,
            icons,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn utilities_dir(&self) -> &Path {
        &self.utilities_dir
    }

    pub fn check_utilities_dir(&self) -> Result<(), UtilHubError> {
        if self.utilities_dir.is_dir() {
            Ok(())
        } else {
            Err(UtilHubError::UtilitiesDirMissing {
                path: self.utilities_dir.clone(),
            })
        }
    }

    /// Primary folder first, then the extra folder when it exists
    pub fn catalog_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.utilities_dir.clone()];
        match &self.extra_dir {
            Some(extra) if extra.is_dir() => dirs.push(extra.clone()),
            Some(extra) => debug!(path = %extra.display(), "Extra folder not found, ignoring"),
            None => {}
        }
        dirs
    }

    /// Run the session to completion and return the process exit code.
    ///
    /// Errors are terminal I/O failures only; everything else is reported
    /// on screen.
    #[instrument(level = "debug", skip_all, fields(utilities_dir = %self.utilities_dir.display()))]
    pub fn run(&self, session: &mut Session) -> Result<u8, UtilHubError> {
        if let Err(e) = self.check_utilities_dir() {
            error!(error = %e, "Utilities folder missing");
            session.screen.status(e.severity().into(), e.user_message())?;
            return Ok(EXIT_MISSING_DIR);
        }

        let dirs = self.catalog_dirs();
        let options = LoadOptions::from_config(&self.config);
        let picker_config = self.config.get_picker();
        let icons = self.icons;

        loop {
            session.screen.clear_messages();
            session.screen.status(Tone::Info, strings::STATUS_LOADING)?;
            let report = load_catalog(&dirs, &options);
            logging::log_catalog_loaded(report.catalog.len(), report.skipped.len(), dirs.len());

            if report.is_empty() {
                session.screen.clear_messages();
                session.screen.status(Tone::Warning, strings::MESSAGE_NO_UTILITIES)?;
                session.screen.status(Tone::Muted, strings::MESSAGE_PRESS_KEY_TO_EXIT)?;
                session.screen.wait_for_key(&mut *session.events)?;
                info!("No utilities found, exiting");
                return Ok(EXIT_OK);
            }

            let notice = skipped_notice(&report);
            let catalog = &report.catalog;
            let window = picker_config.window_for(catalog.len());
            let picked = tui::pick(
                session.screen,
                &mut *session.events,
                catalog.len(),
                window,
                |frame, state| {
                    let view = PickerView {
                        catalog,
                        state: *state,
                        icons,
                        notice: notice.as_deref(),
                    };
                    tui::draw_picker(frame, &view)
                },
            )?;

            let Some(record) = picked.and_then(|index| catalog.get(index)) else {
                info!("Picker cancelled, exiting");
                return Ok(EXIT_OK);
            };
            debug!(utility = record.id(), "Utility selected");

            let Some(action) = choose_action(session.screen, &mut *session.events, record, icons)?
            else {
                debug!("Action menu dismissed");
                continue;
            };

            let mut ctx = ActionContext {
                screen: &mut *session.screen,
                events: &mut *session.events,
                harness: &mut *session.harness,
                opener: session.opener,
                utilities_dir: &self.utilities_dir,
            };
            if dispatch(action, record, &mut ctx)? == Flow::Exit {
                info!("Exit selected");
                return Ok(EXIT_OK);
            }
        }
    }
}

/// Status line listing files left out of this load
fn skipped_notice(report: &LoadReport) -> Option<String> {
    if report.skipped.is_empty() {
        return None;
    }
    let names: Vec<String> = report
        .skipped
        .iter()
        .map(|skipped| {
            skipped
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| skipped.path.display().to_string())
        })
        .collect();
    Some(format!("{} {}", strings::MESSAGE_SKIPPED_FILES, names.join(", ")))
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
