//! Core abstractions for pomo.
//!
//! This module provides the traits connecting the session controller to
//! its renderers and notifiers.

mod traits;

#[cfg(test)]
pub use traits::MockNotifier;
pub use traits::{DisplayUpdate, Notifier, Renderer};
