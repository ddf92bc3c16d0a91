//! Action menu and dispatcher
//!
//! After a utility is confirmed in the picker, the user chooses what to do
//! with it: run it, reload the list, open the utilities folder, or exit.
//!
//! ## Module Structure
//! - `types`: `Action` and the `Flow` returned to the launcher loop
//! - `menu`: the interactive menu beneath the preview
//! - `dispatch`: carrying out the chosen action

mod dispatch;
mod menu;
mod types;

pub use dispatch::{dispatch, ActionContext};
pub use menu::choose_action;
pub use types::{Action, Flow};
