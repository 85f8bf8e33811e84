//! Repeating tick source for the countdown.

use std::time::{Duration, Instant};

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Time source for loops that wait on a [`Ticker`].
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A repeating tick source.
///
/// Holding a `Ticker` means the countdown is running; dropping it cancels
/// it. Ticks are tracked against a fixed schedule so a slow event loop
/// catches up instead of drifting.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Start a ticker whose first tick is one period after `now`.
    #[must_use]
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Consume and count every tick due at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_due {
            due += 1;
            self.next_due += self.period;
        }
        due
    }

    /// Time left until the next tick, zero if one is already due.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
