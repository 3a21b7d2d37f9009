//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::error::ConfigError;
use crate::source::DEFAULT_SYSFS_ROOT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
///
/// The alert threshold is fixed and intentionally not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Battery source settings
    pub source: SourceConfig,
    /// Notification channel settings
    pub notify: NotifyConfig,
}

impl Config {
    /// Validate values that serde cannot check
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "general.interval_seconds".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.source.sysfs_root.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "source.sysfs_root".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Polling interval in seconds
    pub interval_seconds: u64,
}

impl GeneralConfig {
    /// Polling interval as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Default log level implied by `verbose`
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            interval_seconds: 30,
        }
    }
}

/// Battery source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Battery name (e.g. `BAT0`); first battery found when unset
    pub battery: Option<String>,
    /// Power supply class directory
    pub sysfs_root: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            battery: None,
            sysfs_root: DEFAULT_SYSFS_ROOT.to_string(),
        }
    }
}

/// Notification channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Print notifications to the terminal
    pub terminal: bool,
    /// Send desktop notifications
    pub desktop: bool,
    /// Use ANSI colors in terminal notifications
    pub color: bool,
    /// Announce that monitoring started
    pub announce_start: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            terminal: true,
            desktop: true,
            color: true,
            announce_start: true,
        }
    }
}
