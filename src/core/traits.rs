//! Output seams for the session controller.
//!
//! The controller never draws or beeps itself. It pushes state out through
//! a [`Renderer`] and a [`Notifier`], so the same state machine drives the
//! TUI, the line-mode runner, and test fakes.

use serde::Serialize;

use crate::session::{progress, SessionKind, StyleClass};

/// Everything a renderer needs to draw the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayUpdate {
    /// Whole minutes remaining.
    pub minutes: u32,
    /// Seconds remaining past the whole minutes.
    pub seconds: u32,
    /// Human-readable session label.
    pub label: &'static str,
    /// Style class for the session kind.
    pub style: StyleClass,
    /// Position within the long-break cycle.
    pub cycle_index: u32,
    /// Elapsed fraction of the interval, 0.0 - 1.0.
    pub progress: f64,
}

impl DisplayUpdate {
    /// Build an update for a kind with the given countdown state.
    #[must_use]
    pub fn new(
        kind: SessionKind,
        remaining_seconds: u32,
        total_seconds: u32,
        cycle_index: u32,
    ) -> Self {
        let (minutes, seconds) = progress::split_minutes(remaining_seconds);
        Self {
            minutes,
            seconds,
            label: kind.label(),
            style: kind.style(),
            cycle_index,
            progress: progress::progress_fraction(total_seconds, remaining_seconds),
        }
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn time_text(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Display sink driven by the session controller.
pub trait Renderer {
    /// Redraw the countdown, label, cycle position and progress.
    fn update(&mut self, display: &DisplayUpdate);

    /// Set the mode-toggle control's label and style.
    fn set_toggle_label(&mut self, label: &str, rest_style: bool);

    /// Enable or disable the start/pause controls for the running state.
    fn set_controls(&mut self, running: bool);

    /// Show the transient "saved" confirmation.
    fn confirm_saved(&mut self);
}

/// Alert sink fired when a session completes.
///
/// Implementations must swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Play a cue and, where permitted, raise a desktop notification.
    fn alert(&mut self, message: &str);
}
