//! Trait definitions for battery sources
//!
//! These traits abstract over the host battery interface to enable testing
//! with mocks and recorded readings.

use crate::domain::{PowerSample, RawBatteryReading};
use crate::error::{DomainError, SourceError};

/// Outcome of taking one reading from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// Usable reading and its normalized sample
    Sample {
        raw: RawBatteryReading,
        sample: PowerSample,
    },
    /// Reading could not be normalized and was dropped
    Dropped(DomainError),
    /// Source has no more readings
    Exhausted,
}

/// A push or poll point that yields battery readings
pub trait BatterySource: Send {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Take the next raw reading
    fn read(&mut self) -> Result<RawBatteryReading, SourceError>;

    /// Take the next reading and normalize it
    ///
    /// Unusable readings are logged and reported as `Dropped`; only
    /// unexpected source failures are errors.
    fn next_reading(&mut self) -> Result<Reading, SourceError> {
        let raw = match self.read() {
            Ok(raw) => raw,
            Err(SourceError::Exhausted) => return Ok(Reading::Exhausted),
            Err(e) => return Err(e),
        };

        match PowerSample::from_raw(&raw) {
            Ok(sample) => Ok(Reading::Sample { raw, sample }),
            Err(e) => {
                log::warn!("{}: dropping reading: {}", self.name(), e);
                Ok(Reading::Dropped(e))
            }
        }
    }
}
