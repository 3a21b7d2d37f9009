//! Battery source layer
//!
//! Provides trait-based abstractions over where battery readings come from.

pub mod replay;
pub mod sysfs;
pub mod traits;

pub use replay::ReplaySource;
pub use sysfs::{list_batteries, SysfsSource, DEFAULT_SYSFS_ROOT};
pub use traits::{BatterySource, Reading};
