//! Terminal UI - the rendering surface and key input
//!
//! # Module Structure
//!
//! - `events` - blocking key input and key mapping
//! - `screen` - terminal session (raw mode, alternate screen, suspend/resume)
//! - `render` - header, list/preview panes, action menu, message panel
//! - `picker` - the interactive loop shared by the utility list and action menu

mod events;
mod picker;
mod render;
mod screen;

pub use events::{nav_key, CrosstermEvents, EventSource, Input};
pub use picker::pick;
pub use render::{draw_action_menu, draw_picker, PickerView};
pub use screen::{Screen, Tone};

#[cfg(test)]
pub(crate) use events::ScriptedKeys;
