//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and defaults kept when none exists.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI interval
    pub fn with_interval(mut self, interval: Option<u64>) -> Self {
        if let Some(i) = interval {
            self.config.general.interval_seconds = i;
        }
        self
    }

    /// Override with CLI battery name
    pub fn with_battery(mut self, battery: Option<String>) -> Self {
        if let Some(b) = battery {
            self.config.source.battery = Some(b);
        }
        self
    }

    /// Override with CLI power supply root
    pub fn with_sysfs_root(mut self, root: Option<String>) -> Self {
        if let Some(r) = root {
            self.config.source.sysfs_root = r;
        }
        self
    }

    /// Override desktop notifications
    pub fn with_desktop(mut self, desktop: Option<bool>) -> Self {
        if let Some(d) = desktop {
            self.config.notify.desktop = d;
        }
        self
    }

    /// Override terminal colors
    pub fn with_color(mut self, color: Option<bool>) -> Self {
        if let Some(c) = color {
            self.config.notify.color = c;
        }
        self
    }

    /// Override the start announcement
    pub fn with_announce_start(mut self, announce: Option<bool>) -> Self {
        if let Some(a) = announce {
            self.config.notify.announce_start = a;
        }
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
