//! Battery status view
//!
//! The interactive counterpart of the watch service: keeps the latest
//! sample for display and shares the same threshold monitor logic.

use crate::alerts::{AlertEvent, NotificationManager, ThresholdAlertMonitor};
use crate::domain::{PowerSample, RawBatteryReading};
use crate::error::SourceError;
use crate::source::{BatterySource, Reading};

/// Headline shown while charging at or above the threshold
pub const HIGH_CHARGE_HEADLINE: &str = "Battery level high! Please unplug";

/// Headline shown otherwise
pub const MONITORING_HEADLINE: &str = "Monitoring battery...";

/// Latest battery state plus its own alert monitor
#[derive(Debug, Default)]
pub struct StatusView {
    monitor: ThresholdAlertMonitor,
    latest: Option<PowerSample>,
}

impl StatusView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample, returning an alert if one is due
    pub fn update(&mut self, sample: PowerSample) -> Option<AlertEvent> {
        self.latest = Some(sample);
        self.monitor.observe(sample)
    }

    /// Take one reading from `source`, dispatching any alert it raises
    ///
    /// Returns the raw reading when the view changed; dropped readings and
    /// an exhausted source leave the view as it was.
    pub fn refresh<S: BatterySource>(
        &mut self,
        source: &mut S,
        notifications: &NotificationManager,
    ) -> Result<Option<RawBatteryReading>, SourceError> {
        match source.next_reading()? {
            Reading::Sample { raw, sample } => {
                if let Some(event) = self.update(sample) {
                    notifications.dispatch(&event);
                }
                Ok(Some(raw))
            }
            Reading::Dropped(_) | Reading::Exhausted => Ok(None),
        }
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<PowerSample> {
        self.latest
    }

    /// Headline for the current state
    pub fn headline(&self) -> &'static str {
        match self.latest {
            Some(sample) if ThresholdAlertMonitor::in_trigger_zone(&sample) => {
                HIGH_CHARGE_HEADLINE
            }
            _ => MONITORING_HEADLINE,
        }
    }
}
