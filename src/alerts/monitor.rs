//! Threshold alert monitor
//!
//! Turns a stream of power samples into at most one alert per high-charge
//! episode.

use super::types::{AlertEvent, AlertState, ALERT_THRESHOLD_PERCENT};
use crate::domain::PowerSample;

/// Threshold-crossing alert monitor
///
/// Emits an [`AlertEvent`] the first time a charging sample reaches the
/// threshold, then stays quiet until a sample drops below it. A sample that
/// stays at or above the threshold but stops charging leaves the state
/// untouched, so plugging back in does not alert again.
#[derive(Debug, Default)]
pub struct ThresholdAlertMonitor {
    state: AlertState,
}

impl ThresholdAlertMonitor {
    /// Create a disarmed monitor
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one sample
    pub fn observe(&mut self, sample: PowerSample) -> Option<AlertEvent> {
        let percent = sample.percent();

        if Self::in_trigger_zone(&sample) && !self.state.armed {
            self.state.armed = true;
            log::debug!("Alert threshold reached at {}%", percent);
            return Some(AlertEvent { percent });
        }

        if percent < ALERT_THRESHOLD_PERCENT && self.state.armed {
            log::debug!("Charge dropped to {}%, re-arming", percent);
            self.state.armed = false;
        }

        None
    }

    /// Whether a sample is at or above the threshold while charging
    pub fn in_trigger_zone(sample: &PowerSample) -> bool {
        sample.percent() >= ALERT_THRESHOLD_PERCENT && sample.is_charging()
    }

    /// Current debounce state
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Whether an alert has been emitted for the current episode
    pub fn is_armed(&self) -> bool {
        self.state.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(monitor: &mut ThresholdAlertMonitor, samples: &[(i64, bool)]) -> Vec<AlertEvent> {
        samples
            .iter()
            .filter_map(|&(percent, charging)| monitor.observe(PowerSample::new(percent, charging)))
            .collect()
    }

    #[test]
    fn test_below_threshold_never_alerts() {
        let mut monitor = ThresholdAlertMonitor::new();
        for percent in 0..80 {
            assert!(monitor.observe(PowerSample::new(percent, true)).is_none());
            assert!(!monitor.is_armed());
        }
    }

    #[test]
    fn test_first_charging_sample_at_threshold_alerts() {
        let mut monitor = ThresholdAlertMonitor::new();
        let event = monitor.observe(PowerSample::new(80, true));
        assert_eq!(event, Some(AlertEvent { percent: 80 }));
        assert!(monitor.is_armed());
    }

    #[test]
    fn test_not_charging_at_threshold_does_not_alert() {
        let mut monitor = ThresholdAlertMonitor::new();
        assert!(monitor.observe(PowerSample::new(95, false)).is_none());
        assert!(!monitor.is_armed());
    }

    #[test]
    fn test_repeats_suppressed_while_armed() {
        let mut monitor = ThresholdAlertMonitor::new();
        let events = feed(&mut monitor, &[(80, true), (81, true), (90, true), (100, true)]);
        assert_eq!(events, vec![AlertEvent { percent: 80 }]);
    }

    #[test]
    fn test_rearms_after_dropping_below_threshold() {
        let mut monitor = ThresholdAlertMonitor::new();
        let events = feed(&mut monitor, &[(80, true), (79, false), (85, true)]);
        assert_eq!(
            events,
            vec![AlertEvent { percent: 80 }, AlertEvent { percent: 85 }]
        );
    }

    #[test]
    fn test_unplugging_above_threshold_does_not_rearm() {
        let mut monitor = ThresholdAlertMonitor::new();
        let events = feed(&mut monitor, &[(85, true), (85, false), (85, true)]);
        assert_eq!(events.len(), 1);
        assert!(monitor.is_armed());
    }

    #[test]
    fn test_drop_below_threshold_disarms_regardless_of_charging() {
        let mut monitor = ThresholdAlertMonitor::new();
        monitor.observe(PowerSample::new(82, true));
        assert!(monitor.is_armed());

        assert!(monitor.observe(PowerSample::new(79, true)).is_none());
        assert!(!monitor.is_armed());
    }

    #[test]
    fn test_same_sample_twice_never_double_emits() {
        let mut monitor = ThresholdAlertMonitor::new();
        let sample = PowerSample::new(88, true);
        assert!(monitor.observe(sample).is_some());
        assert!(monitor.observe(sample).is_none());
        assert_eq!(monitor.state(), AlertState { armed: true });
    }

    #[test]
    fn test_trigger_zone() {
        assert!(ThresholdAlertMonitor::in_trigger_zone(&PowerSample::new(80, true)));
        assert!(!ThresholdAlertMonitor::in_trigger_zone(&PowerSample::new(79, true)));
        assert!(!ThresholdAlertMonitor::in_trigger_zone(&PowerSample::new(100, false)));
    }

    #[test]
    fn test_clamped_sample_alerts_at_full() {
        let mut monitor = ThresholdAlertMonitor::new();
        let event = monitor.observe(PowerSample::new(140, true));
        assert_eq!(event, Some(AlertEvent { percent: 100 }));
    }
}
