//! Terminal User Interface (TUI) for pomo.
//!
//! Provides the interactive Pomodoro timer with a progress ring and a
//! settings panel. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Field, SettingsForm, TuiView};
pub use event::{handle_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::core::Notifier;
use crate::error::PomoError;
use crate::session::Durations;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<N: Notifier>(durations: Durations, notifier: N) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(durations, notifier);
    info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    info!("tui stopped");

    result
}

/// Run the main application loop.
fn run_app<B: Backend, N: Notifier>(
    terminal: &mut Terminal<B>,
    app: &mut App<N>,
) -> Result<(), PomoError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            apply(app, action);
        }

        app.advance(Instant::now());
    }

    Ok(())
}

/// Apply an action to the app.
pub fn apply<N: Notifier>(app: &mut App<N>, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Start => app.controller.start(),
        Action::Pause => app.controller.pause(),
        Action::StartPause => app.toggle_running(),
        Action::Reset => app.controller.reset(),
        Action::ToggleMode => app.toggle_mode(),
        Action::EditSettings => app.open_settings(),
        Action::SaveSettings => app.save_settings(),
        Action::CancelSettings => app.cancel_settings(),
    }
}
