//! Session kinds and their display metadata.

use serde::{Deserialize, Serialize};

/// The active interval type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Focused work interval
    Work,
    /// Short break after a work interval
    ShortBreak,
    /// Long break after a full cycle of work intervals
    LongBreak,
}

/// Style class a renderer applies for a session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    /// Work styling
    Work,
    /// Short break styling
    Break,
    /// Long break styling
    LongBreak,
}

impl StyleClass {
    /// Get the class name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
            Self::LongBreak => "long-break",
        }
    }
}

impl std::fmt::Display for StyleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SessionKind {
    /// Every kind, in cycle order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// Default duration in minutes.
    #[must_use]
    pub const fn default_minutes(&self) -> u32 {
        match self {
            Self::Work => 25,
            Self::ShortBreak => 5,
            Self::LongBreak => 15,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Get the style class for renderers.
    #[must_use]
    pub const fn style(&self) -> StyleClass {
        match self {
            Self::Work => StyleClass::Work,
            Self::ShortBreak => StyleClass::Break,
            Self::LongBreak => StyleClass::LongBreak,
        }
    }

    /// Alert message for when a session of this kind finishes.
    #[must_use]
    pub const fn completion_message(&self) -> &'static str {
        match self {
            Self::Work => "Work session complete! Time for a break.",
            Self::ShortBreak | Self::LongBreak => "Break complete! Time to get back to work.",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
