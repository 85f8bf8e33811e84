//! Per-kind interval durations and minute-input sanitizing.

use serde::{Deserialize, Serialize};

use crate::session::SessionKind;

/// Interval length in minutes for each session kind.
///
/// Every value is a positive number of minutes. Construction through
/// [`Durations::sanitized`] or [`Durations::parse`] replaces anything else
/// with the kind's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Work interval minutes.
    pub work: u32,
    /// Short break minutes.
    pub short_break: u32,
    /// Long break minutes.
    pub long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: SessionKind::Work.default_minutes(),
            short_break: SessionKind::ShortBreak.default_minutes(),
            long_break: SessionKind::LongBreak.default_minutes(),
        }
    }
}

impl Durations {
    /// Build from raw minute values, replacing zeros with defaults.
    #[must_use]
    pub const fn sanitized(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work: or_default(work, SessionKind::Work),
            short_break: or_default(short_break, SessionKind::ShortBreak),
            long_break: or_default(long_break, SessionKind::LongBreak),
        }
    }

    /// Parse three user-supplied minute strings.
    #[must_use]
    pub fn parse(work: &str, short_break: &str, long_break: &str) -> Self {
        Self {
            work: parse_minutes(work, SessionKind::Work),
            short_break: parse_minutes(short_break, SessionKind::ShortBreak),
            long_break: parse_minutes(long_break, SessionKind::LongBreak),
        }
    }

    /// Minutes configured for a kind.
    #[must_use]
    pub const fn minutes(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work,
            SessionKind::ShortBreak => self.short_break,
            SessionKind::LongBreak => self.long_break,
        }
    }

    /// Total seconds of an interval of this kind.
    #[must_use]
    pub const fn total_seconds(&self, kind: SessionKind) -> u32 {
        self.minutes(kind).saturating_mul(60)
    }
}

const fn or_default(minutes: u32, kind: SessionKind) -> u32 {
    if minutes == 0 {
        kind.default_minutes()
    } else {
        minutes
    }
}

/// Parse a minute count, falling back to the kind's default.
///
/// Anything that is not a positive integer (empty, non-numeric, zero,
/// negative) yields the default.
#[must_use]
pub fn parse_minutes(input: &str, kind: SessionKind) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => u32::try_from(minutes).unwrap_or(u32::MAX),
        _ => kind.default_minutes(),
    }
}
