//! Transient "Saved!" confirmation for the settings control.

use std::time::{Duration, Instant};

/// How long the confirmation stays visible.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(2);

/// Label shown on the save control normally.
pub const SAVE_LABEL: &str = "Save Settings";

/// Label shown while the confirmation is visible.
pub const SAVED_LABEL: &str = "Saved!";

/// A single restartable deadline after which the save label reverts.
#[derive(Debug, Clone, Default)]
pub struct Confirmation {
    until: Option<Instant>,
}

impl Confirmation {
    /// Create a confirmation that is not showing.
    #[must_use]
    pub const fn new() -> Self {
        Self { until: None }
    }

    /// Show the confirmation, restarting the window if already showing.
    pub fn show(&mut self, now: Instant) {
        self.until = Some(now + CONFIRMATION_WINDOW);
    }

    /// Check whether the confirmation is visible at `now`.
    #[must_use]
    pub fn is_showing(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// The save control's label at `now`.
    #[must_use]
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_showing(now) {
            SAVED_LABEL
        } else {
            SAVE_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let c = Confirmation::new();
        assert_eq!(c.label(Instant::now()), SAVE_LABEL);
    }

    #[test]
    fn test_reverts_after_window() {
        let now = Instant::now();
        let mut c = Confirmation::new();
        c.show(now);
        assert_eq!(c.label(now + Duration::from_millis(1999)), SAVED_LABEL);
        assert_eq!(c.label(now + CONFIRMATION_WINDOW), SAVE_LABEL);
    }

    #[test]
    fn test_show_restarts_window() {
        let now = Instant::now();
        let mut c = Confirmation::new();
        c.show(now);
        c.show(now + Duration::from_secs(1));
        assert!(c.is_showing(now + Duration::from_millis(2500)));
        assert!(!c.is_showing(now + Duration::from_secs(3)));
    }
}
