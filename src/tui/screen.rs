//! Terminal session
//!
//! An interactive `Screen` owns raw mode and the alternate screen. It can be
//! suspended so a child process gets the normal terminal, and resumed after.
//! A headless `Screen` draws nothing and records every message in a
//! transcript instead.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use super::events::{EventSource, Input};
use super::render;
use crate::error::{ErrorSeverity, ResultExt, UtilHubError};

type Backend = CrosstermBackend<Stdout>;

/// How a message line is colored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Muted,
    Success,
    Warning,
    Error,
}

impl From<ErrorSeverity> for Tone {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Warning => Tone::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => Tone::Error,
        }
    }
}

pub struct Screen {
    terminal: Option<Terminal<Backend>>,
    /// Raw mode + alternate screen currently held
    active: bool,
    /// Lines shown on the message panel while active
    messages: Vec<(Tone, String)>,
    transcript: Vec<(Tone, String)>,
}

impl Screen {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn interactive() -> Result<Self, UtilHubError> {
        let mut screen = Screen {
            terminal: Some(Terminal::new(CrosstermBackend::new(io::stdout()))?),
            active: false,
            messages: Vec::new(),
            transcript: Vec::new(),
        };
        screen.resume()?;
        Ok(screen)
    }

    /// A screen that renders nothing, for tests and scripted sessions
    pub fn headless() -> Self {
        Screen {
            terminal: None,
            active: false,
            messages: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Messages recorded by a headless screen
    pub fn transcript(&self) -> &[(Tone, String)] {
        &self.transcript
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<(), UtilHubError> {
        if let (Some(terminal), true) = (self.terminal.as_mut(), self.active) {
            terminal.draw(render)?;
        }
        Ok(())
    }

    /// Hand the terminal back to the shell (before running a child process).
    pub fn suspend(&mut self) -> Result<(), UtilHubError> {
        if !self.active {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)?;
        self.active = false;
        debug!("Terminal suspended");
        Ok(())
    }

    /// Re-enter raw mode and the alternate screen, forcing a full repaint.
    pub fn resume(&mut self) -> Result<(), UtilHubError> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        if self.active {
            return Ok(());
        }
        take_over(&mut self.active, enable_raw_mode, || {
            execute!(io::stdout(), EnterAlternateScreen, Hide)?;
            terminal.clear()?;
            Ok(())
        })?;
        debug!("Terminal resumed");
        Ok(())
    }

    /// Start a fresh message panel.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Show a message line. While active it is appended to the message
    /// panel; while suspended it is printed to stdout.
    pub fn status(&mut self, tone: Tone, text: impl Into<String>) -> Result<(), UtilHubError> {
        let text = text.into();
        if self.terminal.is_none() {
            self.transcript.push((tone, text));
            return Ok(());
        }
        if self.active {
            self.messages.push((tone, text));
            self.redraw_messages()
        } else {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", styled(tone, &text))?;
            stdout.flush()?;
            Ok(())
        }
    }

    /// Block until any key is pressed. Closed input counts as a key.
    pub fn wait_for_key(&mut self, events: &mut dyn EventSource) -> Result<(), UtilHubError> {
        // Suspended terminals are cooked; a single key needs raw mode
        let temporary_raw = self.terminal.is_some() && !self.active;
        if temporary_raw {
            enable_raw_mode()?;
        }
        let result = loop {
            match events.next_input() {
                Ok(Some(Input::Key(_))) | Ok(None) => break Ok(()),
                Ok(Some(Input::Resize)) => {
                    if self.active {
                        if let Err(e) = self.redraw_messages() {
                            break Err(e);
                        }
                    }
                }
                Err(e) => break Err(e),
            }
        };
        if temporary_raw {
            disable_raw_mode()?;
        }
        result
    }

    fn redraw_messages(&mut self) -> Result<(), UtilHubError> {
        let messages = self.messages.clone();
        self.draw(|frame| render::draw_messages(frame, &messages))
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        disable_raw_mode().log_err();
        execute!(io::stdout(), LeaveAlternateScreen, Show).log_err();
    }
}

/// Enter raw mode, then finish setup with `rest`. `active` turns on as soon
/// as raw mode does, so a failing `rest` still leaves cleanup to `Drop`.
fn take_over(
    active: &mut bool,
    enter_raw_mode: impl FnOnce() -> io::Result<()>,
    rest: impl FnOnce() -> Result<(), UtilHubError>,
) -> Result<(), UtilHubError> {
    enter_raw_mode()?;
    *active = true;
    rest()
}

fn styled(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Info => text.cyan().to_string(),
        Tone::Muted => text.dark_grey().to_string(),
        Tone::Success => text.green().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Error => text.red().to_string(),
    }
}
