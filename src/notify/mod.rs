//! Completion alerts.
//!
//! Alerts ring the terminal bell and, when permitted, raise a desktop
//! notification through notify-rust. Permission is settled once at startup
//! and every failure degrades silently to whatever still works.

mod desktop;

pub use desktop::{DesktopNotifier, Permission, NOTIFICATION_TITLE};
