//! Mock implementations for testing
//!
//! Provides a scripted battery source and a recording notifier for unit
//! testing without real hardware or a notification daemon.

use crate::alerts::{Notification, Notifier};
use crate::domain::{ChargeStatus, RawBatteryReading};
use crate::error::{Result, SourceError};
use crate::source::BatterySource;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted battery source
///
/// Yields queued readings in order. Once the queue is empty it keeps
/// returning the last reading, or `Exhausted` when `exhaust_at_end` is set.
#[derive(Debug)]
pub struct MockSource {
    name: String,
    queue: VecDeque<std::result::Result<RawBatteryReading, String>>,
    last: Option<RawBatteryReading>,
    exhaust_at_end: bool,
}

impl MockSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            queue: VecDeque::new(),
            last: None,
            exhaust_at_end: true,
        }
    }

    /// Builder: queue readings given as `(percent, charging)` on a 0-100 scale
    pub fn with_samples(mut self, samples: &[(i64, bool)]) -> Self {
        for &(percent, charging) in samples {
            let status = if charging {
                ChargeStatus::Charging
            } else {
                ChargeStatus::Discharging
            };
            self.queue
                .push_back(Ok(RawBatteryReading::new(percent, 100, status)));
        }
        self
    }

    /// Builder: queue a raw reading
    pub fn with_reading(mut self, reading: RawBatteryReading) -> Self {
        self.queue.push_back(Ok(reading));
        self
    }

    /// Builder: queue a read failure
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.queue.push_back(Err(message.into()));
        self
    }

    /// Builder: repeat the last reading forever instead of exhausting
    pub fn repeating(mut self) -> Self {
        self.exhaust_at_end = false;
        self
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> std::result::Result<RawBatteryReading, SourceError> {
        match self.queue.pop_front() {
            Some(Ok(reading)) => {
                self.last = Some(reading);
                Ok(reading)
            }
            Some(Err(message)) => Err(SourceError::Read {
                path: self.name.clone(),
                message,
            }),
            None if self.exhaust_at_end => Err(SourceError::Exhausted),
            None => self.last.ok_or(SourceError::Exhausted),
        }
    }
}

/// Notifier that records every notification it receives
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded notifications
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
