//! The Pomodoro session state machine.
//!
//! [`SessionController`] owns the countdown, the work/break cycle, and the
//! manual mode toggle. It is the only place session state changes; every
//! change is pushed out to its [`Renderer`], and completed intervals fire
//! its [`Notifier`].

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{DisplayUpdate, Notifier, Renderer};
use crate::session::ticker::{Ticker, TICK_INTERVAL};
use crate::session::{progress, Durations, SessionKind};

/// Work sessions per long-break cycle.
pub const SESSIONS_PER_CYCLE: u32 = 4;

/// Label on the mode toggle while in work mode.
const REST_TOGGLE_LABEL: &str = "Rest";

/// Label on the mode toggle while in rest mode.
const WORK_TOGGLE_LABEL: &str = "Work";

/// Countdown and cycle state for one Pomodoro timer.
pub struct SessionController<R, N> {
    kind: SessionKind,
    remaining_seconds: u32,
    ticker: Option<Ticker>,
    cycle_index: u32,
    work_mode: bool,
    durations: Durations,
    renderer: R,
    notifier: N,
}

impl<R: Renderer, N: Notifier> SessionController<R, N> {
    /// Create a controller at the start of a work session and draw it once.
    pub fn new(durations: Durations, renderer: R, notifier: N) -> Self {
        let mut controller = Self {
            kind: SessionKind::Work,
            remaining_seconds: durations.total_seconds(SessionKind::Work),
            ticker: None,
            cycle_index: 1,
            work_mode: true,
            durations,
            renderer,
            notifier,
        };
        controller.render();
        controller.render_toggle();
        controller.renderer.set_controls(false);
        controller
    }

    /// Start the countdown. No-op if already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start the countdown with the first tick one second after `now`.
    pub fn start_at(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        self.ticker = Some(Ticker::start(now, TICK_INTERVAL));
        self.renderer.set_controls(true);
        info!(kind = ?self.kind, remaining = self.remaining_seconds, "timer started");
    }

    /// Pause the countdown, keeping the remaining time. No-op if idle.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.stop();
        info!(kind = ?self.kind, remaining = self.remaining_seconds, "timer paused");
    }

    /// Stop the countdown and rewind the current session to its full length.
    pub fn reset(&mut self) {
        self.stop();
        self.remaining_seconds = self.total_seconds();
        self.render();
        debug!(kind = ?self.kind, "timer reset");
    }

    /// Fire every tick that has come due by `now`.
    ///
    /// Stops early once a tick completes the session; the rest are dropped.
    pub fn advance(&mut self, now: Instant) {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.take_due(now),
            None => return,
        };
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.tick();
        }
    }

    /// Fire a single tick. No-op if idle.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.render();
        if self.remaining_seconds == 0 {
            self.complete_session();
        }
    }

    /// Time until the next tick, if running.
    #[must_use]
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|ticker| ticker.time_until_next(now))
    }

    /// Flip between work and short-break mode. No-op while running.
    ///
    /// This is a manual override: it never enters a long break and leaves
    /// the cycle position alone.
    pub fn toggle_mode(&mut self) {
        if self.is_running() {
            return;
        }
        self.work_mode = !self.work_mode;
        self.kind = if self.work_mode {
            SessionKind::Work
        } else {
            SessionKind::ShortBreak
        };
        self.remaining_seconds = self.total_seconds();
        self.render_toggle();
        self.render();
        info!(kind = ?self.kind, "mode toggled");
    }

    /// Apply new durations from raw user input.
    ///
    /// Invalid values fall back to their kind's default. When idle the
    /// current session is retargeted immediately; a running countdown keeps
    /// its remaining time until the next transition. Returns the durations
    /// actually applied.
    pub fn save_settings(&mut self, work: &str, short_break: &str, long_break: &str) -> Durations {
        self.apply_durations(Durations::parse(work, short_break, long_break))
    }

    /// Apply already-parsed durations, with the same semantics as
    /// [`save_settings`](Self::save_settings).
    pub fn apply_durations(&mut self, durations: Durations) -> Durations {
        let durations = Durations::sanitized(
            durations.work,
            durations.short_break,
            durations.long_break,
        );
        self.durations = durations;
        if !self.is_running() {
            self.remaining_seconds = self.total_seconds();
            self.render();
        }
        self.renderer.confirm_saved();
        info!(
            work = durations.work,
            short_break = durations.short_break,
            long_break = durations.long_break,
            running = self.is_running(),
            "settings saved"
        );
        durations
    }

    fn complete_session(&mut self) {
        self.stop();

        let finished = self.kind;
        self.notifier.alert(finished.completion_message());

        if finished == SessionKind::Work {
            self.cycle_index += 1;
            if self.cycle_index > SESSIONS_PER_CYCLE {
                self.kind = SessionKind::LongBreak;
                self.cycle_index = 1;
            } else {
                self.kind = SessionKind::ShortBreak;
            }
        } else {
            self.kind = SessionKind::Work;
        }

        self.remaining_seconds = self.total_seconds();
        self.render();
        info!(
            finished = ?finished,
            next = ?self.kind,
            cycle = self.cycle_index,
            "session complete"
        );
    }

    fn stop(&mut self) {
        if self.ticker.take().is_some() {
            self.renderer.set_controls(false);
        }
    }

    fn total_seconds(&self) -> u32 {
        self.durations.total_seconds(self.kind)
    }

    fn render(&mut self) {
        let update = self.display();
        self.renderer.update(&update);
    }

    fn render_toggle(&mut self) {
        if self.work_mode {
            self.renderer.set_toggle_label(REST_TOGGLE_LABEL, true);
        } else {
            self.renderer.set_toggle_label(WORK_TOGGLE_LABEL, false);
        }
    }
}

impl<R, N> SessionController<R, N> {
    /// The active session kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Position within the long-break cycle, 1-based.
    #[must_use]
    pub const fn cycle_index(&self) -> u32 {
        self.cycle_index
    }

    /// Whether the manual toggle currently favors work.
    #[must_use]
    pub const fn is_work_mode(&self) -> bool {
        self.work_mode
    }

    /// Durations currently in effect.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    /// Elapsed fraction of the current interval.
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress::progress_fraction(
            self.durations.total_seconds(self.kind),
            self.remaining_seconds,
        )
    }

    /// Snapshot of what the renderer is showing.
    #[must_use]
    pub fn display(&self) -> DisplayUpdate {
        DisplayUpdate::new(
            self.kind,
            self.remaining_seconds,
            self.durations.total_seconds(self.kind),
            self.cycle_index,
        )
    }

    /// The renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockNotifier;
    use crate::session::StyleClass;

    #[derive(Default)]
    struct RecordingRenderer {
        updates: Vec<DisplayUpdate>,
        toggle: Option<(String, bool)>,
        controls_running: Option<bool>,
        saved: usize,
    }

    impl Renderer for RecordingRenderer {
        fn update(&mut self, display: &DisplayUpdate) {
            self.updates.push(*display);
        }

        fn set_toggle_label(&mut self, label: &str, rest_style: bool) {
            self.toggle = Some((label.to_string(), rest_style));
        }

        fn set_controls(&mut self, running: bool) {
            self.controls_running = Some(running);
        }

        fn confirm_saved(&mut self) {
            self.saved += 1;
        }
    }

    type TestController = SessionController<RecordingRenderer, MockNotifier>;

    fn any_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_alert().return_const(());
        notifier
    }

    fn controller_with(durations: Durations) -> TestController {
        SessionController::new(durations, RecordingRenderer::default(), any_notifier())
    }

    fn controller() -> TestController {
        controller_with(Durations::default())
    }

    /// Tick until the running session completes.
    fn finish_session(c: &mut TestController) {
        c.start();
        while c.is_running() {
            c.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.kind(), SessionKind::Work);
        assert_eq!(c.remaining_seconds(), 1500);
        assert_eq!(c.cycle_index(), 1);
        assert!(c.is_work_mode());
        assert!(!c.is_running());

        let r = c.renderer();
        assert_eq!(r.updates.len(), 1);
        assert_eq!(r.updates[0].time_text(), "25:00");
        assert_eq!(r.toggle, Some(("Rest".to_string(), true)));
        assert_eq!(r.controls_running, Some(false));
    }

    #[test]
    fn test_start_is_idempotent() {
        let now = Instant::now();
        let mut c = controller();
        c.start_at(now);
        c.start_at(now + Duration::from_millis(900));
        assert!(c.is_running());
        assert_eq!(c.renderer().controls_running, Some(true));
        // The first ticker was kept
        assert_eq!(
            c.next_tick_in(now + Duration::from_millis(900)),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_tick_decrements_and_renders() {
        let mut c = controller();
        c.start();
        c.tick();
        assert_eq!(c.remaining_seconds(), 1499);
        let last = c.renderer().updates.last().copied().unwrap();
        assert_eq!(last.minutes, 24);
        assert_eq!(last.seconds, 59);
        assert!(last.progress > 0.0);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut c = controller();
        c.tick();
        assert_eq!(c.remaining_seconds(), 1500);
        assert_eq!(c.renderer().updates.len(), 1);
    }

    #[test]
    fn test_pause_keeps_remaining() {
        let mut c = controller();
        c.start();
        for _ in 0..10 {
            c.tick();
        }
        c.pause();
        assert!(!c.is_running());
        assert_eq!(c.remaining_seconds(), 1490);
        assert_eq!(c.renderer().controls_running, Some(false));

        c.pause();
        assert!(!c.is_running());
        assert_eq!(c.remaining_seconds(), 1490);

        c.start();
        c.tick();
        assert_eq!(c.remaining_seconds(), 1489);
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut c = controller_with(Durations::sanitized(10, 3, 20));
        c.start();
        for _ in 0..42 {
            c.tick();
        }
        c.reset();
        assert!(!c.is_running());
        assert_eq!(c.remaining_seconds(), 600);
        assert_eq!(c.kind(), SessionKind::Work);

        c.reset();
        assert!(!c.is_running());
        assert_eq!(c.remaining_seconds(), 600);
        assert_eq!(c.cycle_index(), 1);
        assert!(c.is_work_mode());
    }

    #[test]
    fn test_reset_keeps_kind_and_cycle() {
        let mut c = controller();
        finish_session(&mut c);
        c.start();
        c.tick();
        c.reset();
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.cycle_index(), 2);
        assert_eq!(c.remaining_seconds(), 300);
    }

    #[test]
    fn test_full_work_session_completes_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .withf(|message: &str| message == "Work session complete! Time for a break.")
            .times(1)
            .return_const(());
        let mut c = SessionController::new(
            Durations::default(),
            RecordingRenderer::default(),
            notifier,
        );

        c.start();
        for _ in 0..1500 {
            c.tick();
        }

        assert!(!c.is_running());
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.remaining_seconds(), 300);
        assert_eq!(c.cycle_index(), 2);

        // Further ticks do nothing once idle
        c.tick();
        assert_eq!(c.remaining_seconds(), 300);
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .withf(|message: &str| message.starts_with("Work session"))
            .times(1)
            .return_const(());
        notifier
            .expect_alert()
            .withf(|message: &str| message == "Break complete! Time to get back to work.")
            .times(1)
            .return_const(());
        let mut c = SessionController::new(
            Durations::default(),
            RecordingRenderer::default(),
            notifier,
        );

        finish_session(&mut c);
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        let cycle = c.cycle_index();

        finish_session(&mut c);
        assert_eq!(c.kind(), SessionKind::Work);
        assert_eq!(c.cycle_index(), cycle);
        assert_eq!(c.remaining_seconds(), 1500);
    }

    #[test]
    fn test_cycle_reaches_long_break() {
        let mut c = controller_with(Durations::sanitized(1, 1, 2));

        for expected in 2..=SESSIONS_PER_CYCLE {
            finish_session(&mut c);
            assert_eq!(c.kind(), SessionKind::ShortBreak);
            assert_eq!(c.cycle_index(), expected);
            finish_session(&mut c);
            assert_eq!(c.kind(), SessionKind::Work);
        }

        finish_session(&mut c);
        assert_eq!(c.kind(), SessionKind::LongBreak);
        assert_eq!(c.cycle_index(), 1);
        assert_eq!(c.remaining_seconds(), 120);
        assert_eq!(
            c.renderer().updates.last().map(|u| u.style),
            Some(StyleClass::LongBreak)
        );

        finish_session(&mut c);
        assert_eq!(c.kind(), SessionKind::Work);
        assert_eq!(c.cycle_index(), 1);
    }

    #[test]
    fn test_toggle_mode_while_idle() {
        let mut c = controller();
        c.toggle_mode();
        assert!(!c.is_work_mode());
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.remaining_seconds(), 300);
        assert_eq!(c.renderer().toggle, Some(("Work".to_string(), false)));

        c.toggle_mode();
        assert!(c.is_work_mode());
        assert_eq!(c.kind(), SessionKind::Work);
        assert_eq!(c.remaining_seconds(), 1500);
        assert_eq!(c.renderer().toggle, Some(("Rest".to_string(), true)));
        assert_eq!(c.cycle_index(), 1);
    }

    #[test]
    fn test_toggle_mode_while_running_is_noop() {
        let mut c = controller();
        c.start();
        c.tick();
        c.toggle_mode();
        assert!(c.is_running());
        assert!(c.is_work_mode());
        assert_eq!(c.kind(), SessionKind::Work);
        assert_eq!(c.remaining_seconds(), 1499);
    }

    #[test]
    fn test_toggle_skips_long_break_and_keeps_cycle() {
        let mut c = controller_with(Durations::sanitized(1, 1, 1));
        for _ in 0..SESSIONS_PER_CYCLE {
            finish_session(&mut c);
            if c.kind() == SessionKind::ShortBreak {
                finish_session(&mut c);
            }
        }
        assert_eq!(c.kind(), SessionKind::LongBreak);

        // Mode flag never changed, so the first toggle goes to a short break
        c.toggle_mode();
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.cycle_index(), 1);
    }

    #[test]
    fn test_save_settings_fallback() {
        let mut c = controller();
        let applied = c.save_settings("abc", "-5", "15");
        assert_eq!(applied, Durations::default());
        assert_eq!(c.durations(), Durations::default());
        assert_eq!(c.renderer().saved, 1);
    }

    #[test]
    fn test_save_settings_while_idle_retargets() {
        let mut c = controller();
        c.toggle_mode();
        c.save_settings("30", "8", "20");
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.remaining_seconds(), 480);
        assert_eq!(
            c.renderer().updates.last().map(DisplayUpdate::time_text),
            Some("08:00".to_string())
        );
    }

    #[test]
    fn test_save_settings_while_running_keeps_countdown() {
        let mut c = controller();
        c.start();
        c.tick();
        c.save_settings("50", "10", "30");
        assert!(c.is_running());
        assert_eq!(c.remaining_seconds(), 1499);
        assert_eq!(c.durations().work, 50);

        c.pause();
        c.reset();
        assert_eq!(c.remaining_seconds(), 3000);
    }

    #[test]
    fn test_save_settings_shorter_while_running_clamps_progress() {
        let mut c = controller();
        c.start();
        c.save_settings("1", "5", "15");
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.remaining_seconds(), 1490);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut c = controller_with(Durations::sanitized(1, 5, 15));
        c.start();
        let mut last = c.progress();
        while c.is_running() {
            c.tick();
            if c.is_running() {
                assert!(c.progress() >= last);
                last = c.progress();
            }
        }
        // The final Work update before the transition shows a full ring
        let updates = &c.renderer().updates;
        let finished = updates[updates.len() - 2];
        assert_eq!(finished.style, StyleClass::Work);
        assert_eq!(finished.time_text(), "00:00");
        assert!((finished.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_fires_due_ticks() {
        let now = Instant::now();
        let mut c = controller();
        c.start_at(now);
        c.advance(now + Duration::from_millis(500));
        assert_eq!(c.remaining_seconds(), 1500);
        c.advance(now + Duration::from_millis(3200));
        assert_eq!(c.remaining_seconds(), 1497);
    }

    #[test]
    fn test_advance_stops_at_completion() {
        let now = Instant::now();
        let mut c = controller_with(Durations::sanitized(1, 5, 15));
        c.start_at(now);
        c.advance(now + Duration::from_secs(90));
        assert!(!c.is_running());
        assert_eq!(c.kind(), SessionKind::ShortBreak);
        assert_eq!(c.remaining_seconds(), 300);
        assert_eq!(c.next_tick_in(now), None);
    }

    #[test]
    fn test_advance_while_idle_is_noop() {
        let mut c = controller();
        c.advance(Instant::now() + Duration::from_secs(10));
        assert_eq!(c.remaining_seconds(), 1500);
    }
}
