//! Alert and notification system
//!
//! Provides the threshold alert monitor and the notification channels that
//! surface its events.

mod monitor;
mod notifier;
mod types;

pub use monitor::ThresholdAlertMonitor;
#[cfg(feature = "desktop")]
pub use notifier::DesktopNotifier;
pub use notifier::{NotificationManager, Notifier, TerminalNotifier};
pub use types::{
    AlertEvent, AlertState, Notification, NotificationPriority, ALERT_THRESHOLD_PERCENT,
};
