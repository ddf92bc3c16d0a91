//! Interactive list loop
//!
//! Feeds keys from an `EventSource` through `NavigationState::step` and
//! repaints after every transition that keeps browsing.

use ratatui::Frame;
use tracing::debug;

use super::events::{nav_key, EventSource, Input};
use super::screen::Screen;
use crate::error::UtilHubError;
use crate::navigation::{NavigationState, PickerState};

/// Run a picker over `len` entries showing `window` rows.
///
/// Returns the confirmed index, or None when the user cancelled, the input
/// closed, or the list was empty.
pub fn pick(
    screen: &mut Screen,
    events: &mut dyn EventSource,
    len: usize,
    window: usize,
    mut render: impl FnMut(&mut Frame, &NavigationState),
) -> Result<Option<usize>, UtilHubError> {
    let Some(mut state) = NavigationState::new(len, window) else {
        return Ok(None);
    };
    screen.draw(|frame| render(frame, &state))?;

    loop {
        let key = match events.next_input()? {
            None => return Ok(None),
            Some(Input::Resize) => {
                screen.draw(|frame| render(frame, &state))?;
                continue;
            }
            Some(Input::Key(key)) => nav_key(&key),
        };

        match state.step(key) {
            PickerState::Browsing(next) => {
                if next != state {
                    debug!(selected = next.selected(), offset = next.offset(), "Picker moved");
                }
                state = next;
                screen.draw(|frame| render(frame, &state))?;
            }
            PickerState::Selected(index) => return Ok(Some(index)),
            PickerState::Cancelled => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ScriptedKeys;
    use crossterm::event::KeyCode;

    fn run(keys: Vec<KeyCode>, len: usize, window: usize) -> (Option<usize>, usize) {
        let mut screen = Screen::headless();
        let mut events = ScriptedKeys::new(keys);
        let picked = pick(&mut screen, &mut events, len, window, |_, _| {}).unwrap();
        (picked, events.remaining())
    }

    #[test]
    fn enter_confirms_current_row() {
        assert_eq!(run(vec![KeyCode::Down, KeyCode::Down, KeyCode::Enter], 5, 3).0, Some(2));
    }

    #[test]
    fn escape_cancels_and_stops_reading() {
        assert_eq!(run(vec![KeyCode::Esc, KeyCode::Enter], 5, 3), (None, 1));
    }

    #[test]
    fn closed_input_cancels() {
        assert_eq!(run(vec![KeyCode::Down], 5, 3).0, None);
    }

    #[test]
    fn empty_list_never_reads_input() {
        assert_eq!(run(vec![KeyCode::Enter], 0, 3), (None, 1));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(run(vec![KeyCode::Tab, KeyCode::Char('x'), KeyCode::Enter], 2, 2).0, Some(0));
    }

    #[test]
    fn page_down_clamps_to_last() {
        assert_eq!(run(vec![KeyCode::PageDown, KeyCode::Enter], 5, 10).0, Some(4));
    }
}
