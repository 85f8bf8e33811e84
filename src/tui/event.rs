//! Event handling for the TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Notifier;
use crate::error::PomoError;
use crate::tui::app::App;

/// Help text shown in the status bar.
pub const HELP: &str =
    "s:start | p:pause | space:start/pause | r:reset | m:mode | e:settings | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start the countdown.
    Start,
    /// Pause the countdown.
    Pause,
    /// Start or pause, whichever applies.
    StartPause,
    /// Reset the current session.
    Reset,
    /// Toggle work/rest mode.
    ToggleMode,
    /// Open the settings form.
    EditSettings,
    /// Save the settings form.
    SaveSettings,
    /// Close the settings form without saving.
    CancelSettings,
}

/// Handle terminal events, waiting at most until the next tick.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<N: Notifier>(app: &mut App<N>) -> Result<Option<Action>, PomoError> {
    let timeout = app.poll_timeout(Instant::now());
    if event::poll(timeout).map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Map a key press to an action, editing the settings form in place.
pub fn handle_key<N: Notifier>(app: &mut App<N>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.form.editing {
        return handle_form_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char(' ') => Some(Action::StartPause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('m' | 't') => Some(Action::ToggleMode),
        KeyCode::Char('e') => Some(Action::EditSettings),
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    }
}

fn handle_form_key<N: Notifier>(app: &mut App<N>, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SaveSettings),
        KeyCode::Esc => Some(Action::CancelSettings),
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_previous();
            None
        }
        KeyCode::Backspace => {
            app.form.backspace();
            None
        }
        KeyCode::Char(c) => {
            app.form.push(c);
            None
        }
        _ => None,
    }
}
