//! Pomodoro sessions and their countdown.
//!
//! Provides the session state machine and its building blocks:
//! - Session kinds and per-kind durations
//! - The repeating tick source
//! - Progress and countdown formatting
//! - The transient settings confirmation

pub mod confirmation;
pub mod controller;
pub mod durations;
pub mod kind;
pub mod progress;
pub mod ticker;

pub use confirmation::Confirmation;
pub use controller::{SessionController, SESSIONS_PER_CYCLE};
pub use durations::{parse_minutes, Durations};
pub use kind::{SessionKind, StyleClass};
pub use ticker::{Clock, SystemClock, Ticker, TICK_INTERVAL};
