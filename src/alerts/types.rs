//! Alert system domain types
//!
//! Defines the monitor state, the alert event and the notification it maps to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Charge percentage at which the alert fires
pub const ALERT_THRESHOLD_PERCENT: u8 = 80;

/// Debounce state of the monitor
///
/// `armed == true` means an alert has already been emitted for the current
/// high-charge episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertState {
    pub armed: bool,
}

/// Signal that a user-visible notification should be raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Charge percentage that triggered the alert
    pub percent: u8,
}

impl AlertEvent {
    /// Map the event to its fixed notification
    pub fn to_notification(&self) -> Notification {
        Notification::new(
            "Battery Alert!",
            format!("Battery level is at {}%", self.percent),
            NotificationPriority::High,
        )
    }
}

/// Notification priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NotificationPriority {
    /// Background status
    Low,
    /// Regular notification
    Default,
    /// Interrupting alert
    High,
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Default => write!(f, "DEFAULT"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A notification ready to be handed to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub priority: NotificationPriority,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            priority,
        }
    }

    /// Low priority notice that monitoring has started
    pub fn monitoring_started() -> Self {
        Self::new(
            "Battery Monitor Running",
            "Monitoring battery levels...",
            NotificationPriority::Low,
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}
