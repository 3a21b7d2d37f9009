//! Alert notification system
//!
//! Provides notification channels for alerts: terminal and desktop.

use super::types::{AlertEvent, Notification, NotificationPriority};
use crate::error::Result;
use std::io::{self, Write};

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Deliver a notification
    fn notify(&self, notification: &Notification) -> Result<()>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Terminal/console notifier
///
/// Outputs notifications to stderr with colored formatting
pub struct TerminalNotifier {
    /// Use colors (ANSI escape codes)
    use_colors: bool,
}

impl TerminalNotifier {
    /// Create a new terminal notifier
    pub fn new() -> Self {
        Self {
            use_colors: Self::supports_color(),
        }
    }

    /// Create a notifier without colors
    pub fn no_color() -> Self {
        Self {
            use_colors: false,
        }
    }

    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    fn format_notification(&self, notification: &Notification) -> String {
        format!(
            "[{}] {}",
            self.format_priority(notification.priority),
            notification
        )
    }

    fn format_priority(&self, priority: NotificationPriority) -> String {
        if !self.use_colors {
            return format!("{}", priority);
        }

        let color_code = match priority {
            NotificationPriority::Low => "\x1b[36m",        // Cyan
            NotificationPriority::Default => "\x1b[33m",    // Yellow
            NotificationPriority::High => "\x1b[31m\x1b[1m", // Bold Red
        };

        format!("{}{}\x1b[0m", color_code, priority)
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let message = self.format_notification(notification);

        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{}", message)?;

        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Freedesktop notification channel
#[cfg(feature = "desktop")]
pub struct DesktopNotifier {
    app_name: String,
}

#[cfg(feature = "desktop")]
impl DesktopNotifier {
    /// Create a desktop notifier reporting as `battguard`
    pub fn new() -> Self {
        Self {
            app_name: "battguard".to_string(),
        }
    }
}

#[cfg(feature = "desktop")]
impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "desktop")]
impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let mut desktop = notify_rust::Notification::new();
        desktop
            .appname(&self.app_name)
            .summary(&notification.title)
            .body(&notification.body);

        #[cfg(all(unix, not(target_os = "macos")))]
        desktop.urgency(match notification.priority {
            NotificationPriority::Low => notify_rust::Urgency::Low,
            NotificationPriority::Default => notify_rust::Urgency::Normal,
            NotificationPriority::High => notify_rust::Urgency::Critical,
        });

        desktop
            .show()
            .map_err(|e| crate::error::AppError::Notify(e.to_string()))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "desktop"
    }
}

/// Notification manager
///
/// Manages multiple notification channels and dispatches notifications to them
pub struct NotificationManager {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Add a notifier
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Send a notification to all channels
    ///
    /// A failing channel is logged and skipped. Returns the number of
    /// channels that delivered.
    pub fn notify_all(&self, notification: &Notification) -> usize {
        let mut delivered = 0;
        for notifier in &self.notifiers {
            match notifier.notify(notification) {
                Ok(()) => delivered += 1,
                Err(e) => log::warn!("Failed to notify via {}: {}", notifier.name(), e),
            }
        }
        delivered
    }

    /// Raise the notification for an alert event on all channels
    pub fn dispatch(&self, event: &AlertEvent) -> usize {
        log::info!("Battery reached {}% while charging", event.percent);
        let delivered = self.notify_all(&event.to_notification());
        if delivered == 0 && !self.notifiers.is_empty() {
            log::error!("Alert for {}% was not delivered by any channel", event.percent);
        }
        delivered
    }

    /// Get number of active notifiers
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Names of the registered channels
    pub fn channel_names(&self) -> Vec<&str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        let mut manager = Self::new();
        manager.add_notifier(Box::new(TerminalNotifier::new()));
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::mock::RecordingNotifier;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _notification: &Notification) -> Result<()> {
            Err(AppError::Notify("bus unavailable".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_terminal_notifier_creation() {
        let notifier = TerminalNotifier::new();
        assert_eq!(notifier.name(), "terminal");
        assert!(!TerminalNotifier::no_color().use_colors);
    }

    #[test]
    fn test_format_priority() {
        let notifier = TerminalNotifier::no_color();
        assert_eq!(notifier.format_priority(NotificationPriority::Low), "LOW");
        assert_eq!(notifier.format_priority(NotificationPriority::High), "HIGH");
    }

    #[test]
    fn test_format_notification() {
        let notifier = TerminalNotifier::no_color();
        let notification = AlertEvent { percent: 80 }.to_notification();
        assert_eq!(
            notifier.format_notification(&notification),
            "[HIGH] Battery Alert!: Battery level is at 80%"
        );
    }

    #[test]
    fn test_notify() {
        let notifier = TerminalNotifier::no_color();
        let result = notifier.notify(&Notification::monitoring_started());
        assert!(result.is_ok());
    }

    #[test]
    fn test_dispatch_sends_alert_notification() {
        let recorder = RecordingNotifier::new();
        let mut manager = NotificationManager::new();
        manager.add_notifier(Box::new(recorder.clone()));

        assert_eq!(manager.dispatch(&AlertEvent { percent: 84 }), 1);
        let sent = recorder.notifications();
        assert_eq!(sent, vec![AlertEvent { percent: 84 }.to_notification()]);
    }

    #[test]
    fn test_notification_manager_creation() {
        let manager = NotificationManager::new();
        assert_eq!(manager.notifier_count(), 0);
    }

    #[test]
    fn test_notification_manager_default() {
        let manager = NotificationManager::default();
        assert_eq!(manager.channel_names(), vec!["terminal"]);
    }

    #[test]
    fn test_failing_channel_does_not_block_others() {
        let recorder = RecordingNotifier::new();
        let mut manager = NotificationManager::new();
        manager.add_notifier(Box::new(FailingNotifier));
        manager.add_notifier(Box::new(recorder.clone()));

        let delivered = manager.notify_all(&AlertEvent { percent: 90 }.to_notification());
        assert_eq!(delivered, 1);
        assert_eq!(recorder.notifications().len(), 1);
    }
}
