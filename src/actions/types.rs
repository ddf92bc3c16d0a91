//! Action types
//!
//! The fixed post-selection menu and what the launcher does after each entry.

use crate::strings;

/// Entries of the action menu, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Run,
    Reload,
    OpenFolder,
    Exit,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Run, Action::Reload, Action::OpenFolder, Action::Exit];

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Action::Run => strings::ACTION_RUN,
            Action::Reload => strings::ACTION_RELOAD_LIST,
            Action::OpenFolder => strings::ACTION_OPEN_UTILITIES_FOLDER,
            Action::Exit => strings::ACTION_EXIT,
        }
    }

    /// Stable identifier for logs
    pub fn id(self) -> &'static str {
        match self {
            Action::Run => "run",
            Action::Reload => "reload",
            Action::OpenFolder => "open_folder",
            Action::Exit => "exit",
        }
    }

    pub fn labels() -> [&'static str; 4] {
        Action::ALL.map(Action::label)
    }
}

/// What the launcher loop does once an action completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Reload the catalog and show the picker again
    Continue,
    Exit,
}
