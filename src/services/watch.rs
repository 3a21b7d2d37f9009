//! Battery watch service
//!
//! Polls a battery source at a fixed interval, feeds each sample to the
//! threshold monitor and dispatches alert notifications.

use crate::alerts::{AlertEvent, Notification, NotificationManager, ThresholdAlertMonitor};
use crate::error::AppError;
use crate::source::{BatterySource, Reading};

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const STOP_POLL: Duration = Duration::from_millis(100);

/// Configuration for the watch service
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Interval between samples
    pub interval: Duration,
    /// Whether to exit after one tick
    pub single_use: bool,
    /// Send a low priority notification when monitoring starts
    pub announce_start: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            single_use: false,
            announce_start: true,
        }
    }
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Sample observed, no alert
    Observed,
    /// Sample observed and an alert was raised
    Alerted(AlertEvent),
    /// Reading could not be used and was dropped
    Dropped,
    /// Source has no more readings
    Exhausted,
}

/// Counters reported when the watch loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WatchSummary {
    pub samples: u64,
    pub alerts: u64,
    pub dropped: u64,
}

/// Long-running battery guard
pub struct WatchService<S: BatterySource> {
    config: WatchConfig,
    source: S,
    monitor: ThresholdAlertMonitor,
    notifications: NotificationManager,
    summary: WatchSummary,
}

impl<S: BatterySource> WatchService<S> {
    /// Create a new watch service with a fresh, disarmed monitor
    pub fn new(config: WatchConfig, source: S, notifications: NotificationManager) -> Self {
        Self {
            config,
            source,
            monitor: ThresholdAlertMonitor::new(),
            notifications,
            summary: WatchSummary::default(),
        }
    }

    /// Take one sample and act on it
    ///
    /// Unusable readings are logged and dropped; only unexpected source
    /// failures are returned as errors.
    pub fn tick(&mut self) -> Result<TickOutcome, AppError> {
        let sample = match self.source.next_reading()? {
            Reading::Sample { sample, .. } => sample,
            Reading::Dropped(_) => {
                self.summary.dropped += 1;
                return Ok(TickOutcome::Dropped);
            }
            Reading::Exhausted => return Ok(TickOutcome::Exhausted),
        };

        self.summary.samples += 1;
        log::debug!("{}: {}", self.source.name(), sample);

        match self.monitor.observe(sample) {
            Some(event) => {
                self.summary.alerts += 1;
                self.notifications.dispatch(&event);
                Ok(TickOutcome::Alerted(event))
            }
            None => Ok(TickOutcome::Observed),
        }
    }

    /// Run until `running` is cleared, the source is exhausted, or after
    /// one tick in single-use mode
    pub fn run(&mut self, running: &AtomicBool) -> Result<WatchSummary, AppError> {
        log::info!(
            "Watching {} every {:?}",
            self.source.name(),
            self.config.interval
        );

        if self.config.announce_start {
            self.notifications
                .notify_all(&Notification::monitoring_started());
        }

        while running.load(Ordering::SeqCst) {
            match self.tick() {
                Ok(TickOutcome::Exhausted) => {
                    log::info!("{}: no more readings", self.source.name());
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Battery read failed: {}", e);
                    self.summary.dropped += 1;
                }
            }

            if self.config.single_use {
                log::info!("Single-use mode: exiting after one tick");
                break;
            }

            sleep_while_running(self.config.interval, running);
        }

        log::info!(
            "Watch stopped: {} samples, {} alerts, {} dropped",
            self.summary.samples,
            self.summary.alerts,
            self.summary.dropped
        );
        Ok(self.summary)
    }

    /// Counters so far
    pub fn summary(&self) -> WatchSummary {
        self.summary
    }

    /// The monitor owned by this service
    pub fn monitor(&self) -> &ThresholdAlertMonitor {
        &self.monitor
    }
}

/// Sleep for `interval`, waking early once `running` is cleared
pub(crate) fn sleep_while_running(interval: Duration, running: &AtomicBool) {
    let deadline = Instant::now() + interval;
    loop {
        let now = Instant::now();
        if now >= deadline || !running.load(Ordering::SeqCst) {
            break;
        }
        std::thread::sleep(STOP_POLL.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::NotificationPriority;
    use crate::domain::{ChargeStatus, RawBatteryReading};
    use crate::mock::{MockSource, RecordingNotifier};

    fn service(source: MockSource, announce: bool) -> (WatchService<MockSource>, RecordingNotifier) {
        let recorder = RecordingNotifier::new();
        let mut notifications = NotificationManager::new();
        notifications.add_notifier(Box::new(recorder.clone()));

        let config = WatchConfig {
            interval: Duration::ZERO,
            single_use: false,
            announce_start: announce,
        };
        (WatchService::new(config, source, notifications), recorder)
    }

    #[test]
    fn test_watch_config_default() {
        let config = WatchConfig::default();
        assert_eq!(config.interval, Duration::from_secs(30));
        assert!(!config.single_use);
        assert!(config.announce_start);
    }

    #[test]
    fn test_one_notification_per_episode() {
        let source = MockSource::new().with_samples(&[
            (78, true),
            (80, true),
            (84, true),
            (85, false),
            (86, true),
            (70, false),
            (81, true),
        ]);
        let (mut watch, recorder) = service(source, false);

        let summary = watch.run(&AtomicBool::new(true)).unwrap();
        assert_eq!(summary.samples, 7);
        assert_eq!(summary.alerts, 2);

        let bodies: Vec<String> = recorder
            .notifications()
            .into_iter()
            .map(|n| n.body)
            .collect();
        assert_eq!(
            bodies,
            vec!["Battery level is at 80%", "Battery level is at 81%"]
        );
    }

    #[test]
    fn test_announces_start() {
        let source = MockSource::new().with_samples(&[(50, false)]);
        let (mut watch, recorder) = service(source, true);

        watch.run(&AtomicBool::new(true)).unwrap();
        let sent = recorder.notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], Notification::monitoring_started());
        assert_eq!(sent[0].priority, NotificationPriority::Low);
    }

    #[test]
    fn test_bad_readings_are_dropped() {
        let source = MockSource::new()
            .with_reading(RawBatteryReading::new(90, 0, ChargeStatus::Charging))
            .with_failure("EIO")
            .with_samples(&[(90, true)]);
        let (mut watch, recorder) = service(source, false);

        assert_eq!(watch.tick().unwrap(), TickOutcome::Dropped);
        assert!(watch.tick().is_err());
        assert_eq!(
            watch.tick().unwrap(),
            TickOutcome::Alerted(AlertEvent { percent: 90 })
        );
        assert_eq!(watch.tick().unwrap(), TickOutcome::Exhausted);
        assert_eq!(recorder.notifications().len(), 1);
    }

    #[test]
    fn test_run_survives_read_failures() {
        let source = MockSource::new()
            .with_failure("EIO")
            .with_samples(&[(95, true)]);
        let (mut watch, _recorder) = service(source, false);

        let summary = watch.run(&AtomicBool::new(true)).unwrap();
        assert_eq!(summary.dropped, 1);
        assert_eq!(summary.alerts, 1);
        assert!(watch.monitor().is_armed());
    }

    #[test]
    fn test_single_use_takes_one_sample() {
        let source = MockSource::new().with_samples(&[(90, true)]).repeating();
        let (mut watch, _recorder) = service(source, false);
        watch.config.single_use = true;

        let summary = watch.run(&AtomicBool::new(true)).unwrap();
        assert_eq!(summary.samples, 1);
    }

    #[test]
    fn test_stopped_flag_prevents_ticks() {
        let source = MockSource::new().with_samples(&[(90, true)]).repeating();
        let (mut watch, recorder) = service(source, false);

        let summary = watch.run(&AtomicBool::new(false)).unwrap();
        assert_eq!(summary, WatchSummary::default());
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn test_sleep_returns_when_stopped() {
        let start = Instant::now();
        sleep_while_running(Duration::from_secs(60), &AtomicBool::new(false));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
