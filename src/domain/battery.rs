//! Battery domain types
//!
//! Raw readings as a source reports them, and the normalized sample the
//! alert monitor consumes.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Charge status as reported by the battery
///
/// Numeric codes follow the fixed battery-broadcast table (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChargeStatus {
    /// Status not reported
    #[default]
    Unknown,
    /// Plugged in and charging
    Charging,
    /// Running on battery
    Discharging,
    /// Plugged in but not charging (e.g. charge limit reached)
    NotCharging,
    /// Fully charged
    Full,
}

impl ChargeStatus {
    /// Map a numeric status code
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            1 => Ok(Self::Unknown),
            2 => Ok(Self::Charging),
            3 => Ok(Self::Discharging),
            4 => Ok(Self::NotCharging),
            5 => Ok(Self::Full),
            other => Err(DomainError::InvalidStatusCode(other)),
        }
    }

    /// Numeric status code
    pub const fn code(&self) -> i64 {
        match self {
            Self::Unknown => 1,
            Self::Charging => 2,
            Self::Discharging => 3,
            Self::NotCharging => 4,
            Self::Full => 5,
        }
    }

    /// Whether this status counts as charging
    ///
    /// Only an active charge counts; `Full` and `NotCharging` do not.
    #[inline]
    pub const fn is_charging(&self) -> bool {
        matches!(self, Self::Charging)
    }
}

impl FromStr for ChargeStatus {
    type Err = DomainError;

    /// Parse a sysfs status word or a numeric code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "charging" => Ok(Self::Charging),
            "discharging" => Ok(Self::Discharging),
            "not charging" | "not_charging" => Ok(Self::NotCharging),
            "full" => Ok(Self::Full),
            _ => Err(DomainError::UnknownStatus(trimmed.to_string())),
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Charging => write!(f, "Charging"),
            Self::Discharging => write!(f, "Discharging"),
            Self::NotCharging => write!(f, "Not charging"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// Reading as reported by a battery source, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBatteryReading {
    /// Current charge level in source units
    pub level: i64,
    /// Level value that corresponds to a full battery
    pub scale: i64,
    /// Reported charge status
    pub status: ChargeStatus,
}

impl RawBatteryReading {
    /// Create a new raw reading
    pub const fn new(level: i64, scale: i64, status: ChargeStatus) -> Self {
        Self {
            level,
            scale,
            status,
        }
    }
}

/// One observation of battery percentage and charging state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerSample {
    percent: u8,
    is_charging: bool,
}

impl PowerSample {
    /// Create a sample, clamping `percent` into 0..=100
    pub fn new(percent: i64, is_charging: bool) -> Self {
        let clamped = percent.clamp(0, 100);
        if clamped != percent {
            log::debug!("Clamped out-of-range percent {} to {}", percent, clamped);
        }

        Self {
            percent: clamped as u8,
            is_charging,
        }
    }

    /// Normalize a raw reading: `percent = round(level * 100 / scale)`
    ///
    /// The computed percent is clamped into 0..=100. A non-positive scale is
    /// rejected.
    pub fn from_raw(raw: &RawBatteryReading) -> Result<Self, DomainError> {
        if raw.scale <= 0 {
            return Err(DomainError::InvalidScale(raw.scale));
        }

        let percent = (raw.level as f64 * 100.0 / raw.scale as f64).round() as i64;
        Ok(Self::new(percent, raw.status.is_charging()))
    }

    /// Charge percentage (0-100)
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether the battery is charging
    #[inline]
    pub const fn is_charging(&self) -> bool {
        self.is_charging
    }
}

impl fmt::Display for PowerSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_charging {
            "charging"
        } else {
            "not charging"
        };
        write!(f, "{}% ({})", self.percent, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(ChargeStatus::from_code(2).unwrap(), ChargeStatus::Charging);
        assert_eq!(ChargeStatus::from_code(5).unwrap(), ChargeStatus::Full);
        assert_eq!(
            ChargeStatus::from_code(0),
            Err(DomainError::InvalidStatusCode(0))
        );
        assert_eq!(
            ChargeStatus::from_code(-1),
            Err(DomainError::InvalidStatusCode(-1))
        );
    }

    #[test]
    fn test_status_code_matches_table() {
        for code in 1..=5 {
            assert_eq!(ChargeStatus::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_status_from_sysfs_word() {
        assert_eq!(
            "Charging\n".parse::<ChargeStatus>().unwrap(),
            ChargeStatus::Charging
        );
        assert_eq!(
            "Not charging".parse::<ChargeStatus>().unwrap(),
            ChargeStatus::NotCharging
        );
        assert_eq!("2".parse::<ChargeStatus>().unwrap(), ChargeStatus::Charging);
        assert!(matches!(
            "Exploding".parse::<ChargeStatus>(),
            Err(DomainError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_only_charging_counts() {
        assert!(ChargeStatus::Charging.is_charging());
        assert!(!ChargeStatus::Full.is_charging());
        assert!(!ChargeStatus::NotCharging.is_charging());
        assert!(!ChargeStatus::Discharging.is_charging());
        assert!(!ChargeStatus::Unknown.is_charging());
    }

    #[test]
    fn test_sample_from_raw_rounds() {
        let raw = RawBatteryReading::new(199, 250, ChargeStatus::Charging);
        let sample = PowerSample::from_raw(&raw).unwrap();
        assert_eq!(sample.percent(), 80);
        assert!(sample.is_charging());

        let raw = RawBatteryReading::new(197, 250, ChargeStatus::Discharging);
        let sample = PowerSample::from_raw(&raw).unwrap();
        assert_eq!(sample.percent(), 79);
        assert!(!sample.is_charging());
    }

    #[test]
    fn test_sample_from_raw_clamps() {
        let raw = RawBatteryReading::new(150, 100, ChargeStatus::Charging);
        assert_eq!(PowerSample::from_raw(&raw).unwrap().percent(), 100);

        let raw = RawBatteryReading::new(-20, 100, ChargeStatus::Charging);
        assert_eq!(PowerSample::from_raw(&raw).unwrap().percent(), 0);
    }

    #[test]
    fn test_sample_from_raw_rejects_bad_scale() {
        let raw = RawBatteryReading::new(50, 0, ChargeStatus::Charging);
        assert_eq!(
            PowerSample::from_raw(&raw),
            Err(DomainError::InvalidScale(0))
        );

        let raw = RawBatteryReading::new(50, -100, ChargeStatus::Charging);
        assert!(PowerSample::from_raw(&raw).is_err());
    }

    #[test]
    fn test_sample_new_clamps() {
        assert_eq!(PowerSample::new(120, true).percent(), 100);
        assert_eq!(PowerSample::new(-5, false).percent(), 0);
        assert_eq!(PowerSample::new(80, true).percent(), 80);
    }

    #[test]
    fn test_sample_display() {
        assert_eq!(PowerSample::new(85, true).to_string(), "85% (charging)");
        assert_eq!(PowerSample::new(40, false).to_string(), "40% (not charging)");
    }
}
