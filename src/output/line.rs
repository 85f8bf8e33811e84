//! Single-line countdown renderer for non-interactive runs.

use std::io::Write;

use colored::Colorize;
use tracing::warn;

use crate::core::{DisplayUpdate, Renderer};
use crate::session::progress::render_progress_bar;
use crate::session::StyleClass;

/// Width of the progress bar in cells.
const BAR_WIDTH: usize = 20;

/// Renderer that redraws one status line in place.
///
/// When the session kind changes the previous line is kept and a new one
/// starts, so the scrollback shows each interval that ran.
pub struct LineRenderer<W: Write> {
    out: W,
    last_label: Option<&'static str>,
}

impl<W: Write> LineRenderer<W> {
    /// Create a renderer writing to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            last_label: None,
        }
    }

    /// Finish the current line.
    pub fn finish(&mut self) {
        if self.last_label.take().is_some() {
            self.write(b"\n");
        }
    }

    /// The underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    fn write(&mut self, bytes: &[u8]) {
        if let Err(e) = self.out.write_all(bytes).and_then(|()| self.out.flush()) {
            warn!("failed to write status line: {e}");
        }
    }
}

/// Format the status line for an update, without cursor control.
#[must_use]
pub fn format_status_line(display: &DisplayUpdate) -> String {
    let label = match display.style {
        StyleClass::Work => display.label.red().bold(),
        StyleClass::Break => display.label.green().bold(),
        StyleClass::LongBreak => display.label.blue().bold(),
    };
    format!(
        "{label}  {}  {}  #{}",
        display.time_text().bold(),
        render_progress_bar(display.progress, BAR_WIDTH),
        display.cycle_index
    )
}

impl<W: Write> Renderer for LineRenderer<W> {
    fn update(&mut self, display: &DisplayUpdate) {
        let mut line = String::new();
        match self.last_label {
            Some(label) if label != display.label => line.push('\n'),
            _ => line.push('\r'),
        }
        line.push_str("\x1b[2K");
        line.push_str(&format_status_line(display));
        self.last_label = Some(display.label);
        self.write(line.as_bytes());
    }

    // Line mode has no toggle, controls, or settings form
    fn set_toggle_label(&mut self, _label: &str, _rest_style: bool) {}

    fn set_controls(&mut self, _running: bool) {}

    fn confirm_saved(&mut self) {}
}
