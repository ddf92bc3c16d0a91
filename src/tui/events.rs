//! Key input
//!
//! `EventSource` blocks until the next input is available. The crossterm
//! implementation only yields key presses (not releases/repeats) and resizes.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::UtilHubError;
use crate::navigation::NavKey;

/// One unit of terminal input the launcher cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    /// Terminal size changed; the current frame should be redrawn
    Resize,
}

pub trait EventSource {
    /// Block until the next input. `None` means input is closed.
    fn next_input(&mut self) -> Result<Option<Input>, UtilHubError>;
}

/// Reads from the real terminal via crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_input(&mut self) -> Result<Option<Input>, UtilHubError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(Input::Key(key)))
                }
                Event::Resize(_, _) => return Ok(Some(Input::Resize)),
                _ => continue,
            }
        }
    }
}

/// Map a key press to a navigation key. Ctrl+C behaves like Escape.
pub fn nav_key(key: &KeyEvent) -> NavKey {
    match key.code {
        KeyCode::Up => NavKey::Up,
        KeyCode::Down => NavKey::Down,
        KeyCode::PageUp => NavKey::PageUp,
        KeyCode::PageDown => NavKey::PageDown,
        KeyCode::Enter => NavKey::Enter,
        KeyCode::Esc => NavKey::Escape,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => NavKey::Escape,
        _ => NavKey::Other,
    }
}

/// Replays a fixed list of key codes, then reports closed input
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedKeys {
    inputs: std::collections::VecDeque<Input>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub(crate) fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        ScriptedKeys {
            inputs: codes
                .into_iter()
                .map(|code| Input::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .collect(),
        }
    }

    pub(crate) fn with_input(mut self, input: Input) -> Self {
        self.inputs.push_back(input);
        self
    }

    pub(crate) fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl EventSource for ScriptedKeys {
    fn next_input(&mut self) -> Result<Option<Input>, UtilHubError> {
        Ok(self.inputs.pop_front())
    }
}
