//! battguard - battery charge guard library
//!
//! This library watches battery level and charging state and raises a
//! notification once charge reaches 80% while plugged in.
//!
//! # Modules
//!
//! - [`alerts`]: Threshold alert monitor and notification channels
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Watch loop and status view
//! - [`source`]: Battery source abstraction layer

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod source;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
