//! Desktop notification and bell alerts.

use std::io::Write;

use notify_rust::Notification;
use tracing::{debug, warn};

use crate::config::NotificationConfig;
use crate::core::Notifier;

/// Summary line of every desktop notification.
pub const NOTIFICATION_TITLE: &str = "Pomodoro Timer";

/// ASCII bell.
const BELL: &[u8] = b"\x07";

/// Whether desktop notifications may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Notifications are allowed and a server is available.
    Granted,
    /// Notifications are disabled or cannot be delivered.
    Denied,
}

impl Permission {
    /// Settle permission once, at startup.
    ///
    /// Disabled in config means denied. On freedesktop platforms a missing
    /// notification server also counts as denied.
    #[must_use]
    pub fn request(enabled: bool) -> Self {
        if !enabled {
            return Self::Denied;
        }
        probe_server()
    }

    /// Check if desktop notifications may be shown.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn probe_server() -> Permission {
    match notify_rust::get_server_information() {
        Ok(info) => {
            debug!(server = %info.name, "notification server available");
            Permission::Granted
        }
        Err(e) => {
            warn!("desktop notifications unavailable: {e}");
            Permission::Denied
        }
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_server() -> Permission {
    Permission::Granted
}

/// Notifier that rings the bell and shows desktop notifications.
#[derive(Debug)]
pub struct DesktopNotifier<W: Write = std::io::Stdout> {
    permission: Permission,
    sound: bool,
    bell: W,
}

impl DesktopNotifier {
    /// Create a notifier from config, probing permission once.
    #[must_use]
    pub fn from_config(config: &NotificationConfig) -> Self {
        Self::new(
            Permission::request(config.desktop),
            config.sound,
            std::io::stdout(),
        )
    }
}

impl<W: Write> DesktopNotifier<W> {
    /// Create a notifier with a settled permission and a bell sink.
    pub const fn new(permission: Permission, sound: bool, bell: W) -> Self {
        Self {
            permission,
            sound,
            bell,
        }
    }

    fn ring(&mut self) {
        if !self.sound {
            return;
        }
        if let Err(e) = self.bell.write_all(BELL).and_then(|()| self.bell.flush()) {
            warn!("failed to ring bell: {e}");
        }
    }

    fn show(&self, message: &str) {
        if !self.permission.is_granted() {
            debug!("skipping desktop notification: permission denied");
            return;
        }
        if let Err(e) = Notification::new()
            .summary(NOTIFICATION_TITLE)
            .body(message)
            .show()
        {
            warn!("failed to show desktop notification: {e}");
        }
    }
}

impl<W: Write> Notifier for DesktopNotifier<W> {
    fn alert(&mut self, message: &str) {
        self.ring();
        self.show(message);
    }
}
