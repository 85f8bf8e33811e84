//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::core::{DisplayUpdate, Notifier, Renderer};
use crate::notify::DesktopNotifier;
use crate::session::{Confirmation, Durations, SessionController, SessionKind};

/// Longest the event loop waits for input before redrawing.
pub const MAX_POLL: Duration = Duration::from_millis(250);

/// Longest value accepted in a settings field.
const MAX_FIELD_LEN: usize = 4;

/// What the TUI shows, as last pushed by the controller.
#[derive(Debug)]
pub struct TuiView {
    /// Latest countdown update.
    pub display: DisplayUpdate,
    /// Mode toggle label.
    pub toggle_label: String,
    /// Whether the toggle uses the rest style.
    pub rest_style: bool,
    /// Whether the countdown is running.
    pub running: bool,
    /// Save confirmation window.
    pub confirmation: Confirmation,
}

impl Default for TuiView {
    fn default() -> Self {
        Self {
            display: DisplayUpdate::new(SessionKind::Work, 0, 0, 1),
            toggle_label: String::new(),
            rest_style: false,
            running: false,
            confirmation: Confirmation::new(),
        }
    }
}

impl Renderer for TuiView {
    fn update(&mut self, display: &DisplayUpdate) {
        self.display = *display;
    }

    fn set_toggle_label(&mut self, label: &str, rest_style: bool) {
        label.clone_into(&mut self.toggle_label);
        self.rest_style = rest_style;
    }

    fn set_controls(&mut self, running: bool) {
        self.running = running;
    }

    fn confirm_saved(&mut self) {
        self.confirmation.show(Instant::now());
    }
}

/// Which settings field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Work minutes
    Work,
    /// Short break minutes
    ShortBreak,
    /// Long break minutes
    LongBreak,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::Work => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Work,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Work => Self::LongBreak,
            Self::ShortBreak => Self::Work,
            Self::LongBreak => Self::ShortBreak,
        }
    }

    /// Session kind this field configures.
    #[must_use]
    pub const fn kind(self) -> SessionKind {
        match self {
            Self::Work => SessionKind::Work,
            Self::ShortBreak => SessionKind::ShortBreak,
            Self::LongBreak => SessionKind::LongBreak,
        }
    }
}

/// The three duration inputs.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    work: String,
    short_break: String,
    long_break: String,
    /// Focused field.
    pub focus: Field,
    /// Whether keys are routed to the form.
    pub editing: bool,
}

impl SettingsForm {
    /// Create a form showing the given durations.
    #[must_use]
    pub fn new(durations: Durations) -> Self {
        Self {
            work: durations.work.to_string(),
            short_break: durations.short_break.to_string(),
            long_break: durations.long_break.to_string(),
            focus: Field::Work,
            editing: false,
        }
    }

    /// Replace every field with the given durations.
    pub fn fill(&mut self, durations: Durations) {
        self.work = durations.work.to_string();
        self.short_break = durations.short_break.to_string();
        self.long_break = durations.long_break.to_string();
    }

    /// Text of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Work => &self.work,
            Field::ShortBreak => &self.short_break,
            Field::LongBreak => &self.long_break,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Work => &mut self.work,
            Field::ShortBreak => &mut self.short_break,
            Field::LongBreak => &mut self.long_break,
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused field.
    pub fn push(&mut self, c: char) {
        let value = self.value_mut();
        if !c.is_control() && value.chars().count() < MAX_FIELD_LEN {
            value.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.value_mut().pop();
    }
}

/// Application state.
pub struct App<N: Notifier = DesktopNotifier> {
    /// The session state machine, rendering into a [`TuiView`].
    pub controller: SessionController<TuiView, N>,
    /// Duration inputs.
    pub form: SettingsForm,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<N: Notifier> App<N> {
    /// Create a new app instance.
    pub fn new(durations: Durations, notifier: N) -> Self {
        let controller = SessionController::new(durations, TuiView::default(), notifier);
        let form = SettingsForm::new(controller.durations());

        Self {
            controller,
            form,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// The controller's view state.
    pub const fn view(&self) -> &TuiView {
        self.controller.renderer()
    }

    /// Start or pause depending on the current state.
    pub fn toggle_running(&mut self) {
        if self.controller.is_running() {
            self.controller.pause();
        } else {
            self.controller.start();
        }
    }

    /// Switch work/rest mode, reporting why if the timer blocks it.
    pub fn toggle_mode(&mut self) {
        if self.controller.is_running() {
            self.status = Some("Pause the timer to switch modes".to_string());
            return;
        }
        self.controller.toggle_mode();
        self.status = None;
    }

    /// Begin editing the duration fields.
    pub fn open_settings(&mut self) {
        self.form.fill(self.controller.durations());
        self.form.focus = Field::Work;
        self.form.editing = true;
        self.status = Some("Tab:next field | Enter:save | Esc:cancel".to_string());
    }

    /// Apply the form, showing the corrected values afterwards.
    pub fn save_settings(&mut self) {
        let applied = self.controller.save_settings(
            self.form.value(Field::Work),
            self.form.value(Field::ShortBreak),
            self.form.value(Field::LongBreak),
        );
        self.form.fill(applied);
        self.form.editing = false;
        self.status = None;
    }

    /// Leave the form without saving.
    pub fn cancel_settings(&mut self) {
        self.form.fill(self.controller.durations());
        self.form.editing = false;
        self.status = None;
    }

    /// Fire ticks due by `now`.
    pub fn advance(&mut self, now: Instant) {
        self.controller.advance(now);
    }

    /// How long to wait for input before the next redraw.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .next_tick_in(now)
            .map_or(MAX_POLL, |next| next.min(MAX_POLL))
    }
}
