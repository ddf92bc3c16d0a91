//! Action menu shown beneath the preview of the chosen utility

use super::types::Action;
use crate::error::UtilHubError;
use crate::icons::IconMode;
use crate::tui::{self, EventSource, Screen};
use crate::utilities::UtilityRecord;

/// Let the user pick an action for `record`. None means Escape (back to the
/// list) or closed input.
pub fn choose_action(
    screen: &mut Screen,
    events: &mut dyn EventSource,
    record: &UtilityRecord,
    icons: IconMode,
) -> Result<Option<Action>, UtilHubError> {
    let labels = Action::labels();
    let picked = tui::pick(screen, events, labels.len(), labels.len(), |frame, state| {
        tui::draw_action_menu(frame, record, icons, &labels, state)
    })?;
    Ok(picked.and_then(|index| Action::ALL.get(index).copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ScriptedKeys;
    use crossterm::event::KeyCode;

    fn choose(keys: Vec<KeyCode>) -> Option<Action> {
        let mut screen = Screen::headless();
        let mut events = ScriptedKeys::new(keys);
        let record = UtilityRecord::from_path("/u/a.csx");
        choose_action(&mut screen, &mut events, &record, IconMode::Plain).unwrap()
    }

    #[test]
    fn enter_on_first_entry_runs() {
        assert_eq!(choose(vec![KeyCode::Enter]), Some(Action::Run));
    }

    #[test]
    fn down_moves_through_menu() {
        assert_eq!(choose(vec![KeyCode::Down, KeyCode::Enter]), Some(Action::Reload));
        assert_eq!(
            choose(vec![KeyCode::Down, KeyCode::Down, KeyCode::Enter]),
            Some(Action::OpenFolder)
        );
        assert_eq!(choose(vec![KeyCode::PageDown, KeyCode::Enter]), Some(Action::Exit));
    }

    #[test]
    fn escape_goes_back() {
        assert_eq!(choose(vec![KeyCode::Esc]), None);
    }
}
