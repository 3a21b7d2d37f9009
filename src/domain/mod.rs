//! Domain models for battguard
//!
//! Types are validated on construction (fail-fast pattern).

pub mod battery;

pub use battery::{ChargeStatus, PowerSample, RawBatteryReading};
