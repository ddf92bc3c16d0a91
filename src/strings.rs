//! User-facing text
//!
//! Every label, hint and message the launcher prints lives here so it can be
//! changed or localized in one place.

/// Application header
pub const APP_NAME: &str = "UTIL HUB";
pub const APP_SUBTITLE: &str = "Launcher for file-based utilities (.NET 10)";

/// Action menu labels
pub const ACTION_RUN: &str = "Run";
pub const ACTION_RELOAD_LIST: &str = "Reload List";
pub const ACTION_OPEN_UTILITIES_FOLDER: &str = "Open Utilities Folder";
pub const ACTION_EXIT: &str = "Exit";

/// Pane headers
pub const HEADER_ACTION: &str = "Action";
pub const HEADER_UTILITIES: &str = "Utilities";

/// Preview labels
pub const LABEL_ID: &str = "Id:";
pub const LABEL_FILE: &str = "File:";
pub const LABEL_DESCRIPTION: &str = "Description:";
pub const LABEL_TAGS: &str = "Tags:";

/// Status lines
pub const STATUS_LOADING: &str = "Loading utilities...";
pub const STATUS_BUILDING: &str = "Building...";
pub const STATUS_RUNNING: &str = "Running:";

pub const KEYBOARD_HINTS: &str = "↑/↓ move • PgUp/PgDn • Enter select • Esc exit";
pub const MENU_HINTS: &str = "↑/↓ move • Enter confirm • Esc back";

/// Messages
pub const MESSAGE_FOLDER_NOT_FOUND: &str = "Folder not found:";
pub const MESSAGE_NO_UTILITIES: &str = "No .csx utilities found in /Utilities";
pub const MESSAGE_PRESS_KEY_TO_EXIT: &str = "Press any key to exit...";
pub const MESSAGE_PRESS_KEY_TO_RETURN: &str = "Press any key to return to menu...";
pub const MESSAGE_DONE: &str = "Done.";
pub const MESSAGE_FINISHED_WITH_EXIT_CODE: &str = "Finished with exit code:";
pub const MESSAGE_OPENED_FOLDER: &str = "Opened folder:";
pub const MESSAGE_BUILD_FAILED: &str = "Build failed";
pub const MESSAGE_FAILED_TO_START: &str = "Failed to start process.";
pub const MESSAGE_COULD_NOT_OPEN_FOLDER: &str = "Could not open folder automatically. Path:";
pub const MESSAGE_SKIPPED_FILES: &str = "Skipped unreadable utilities:";

/// Placeholder for empty preview values
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// `(current/total)` counter under the utilities list
pub fn format_item_count(position: usize, total: usize) -> String {
    format!("({}/{})", position, total)
}

/// `(exit code N)` suffix used after a failed build
pub fn format_exit_code(code: i32) -> String {
    format!("(exit code {})", code)
}
