//! Linux power supply source
//!
//! Reads battery attributes from `/sys/class/power_supply/<name>/`.

use crate::domain::{ChargeStatus, RawBatteryReading};
use crate::error::SourceError;
use crate::source::traits::BatterySource;

use std::fs;
use std::path::{Path, PathBuf};

/// Default power supply class directory
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/power_supply";

/// Battery read through the kernel power supply class
#[derive(Debug, Clone)]
pub struct SysfsSource {
    name: String,
    dir: PathBuf,
}

impl SysfsSource {
    /// Open a battery by name under `root`
    pub fn open<P: AsRef<Path>>(root: P, name: &str) -> Result<Self, SourceError> {
        let dir = root.as_ref().join(name);
        if !dir.is_dir() {
            return Err(SourceError::NotFound(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            dir,
        })
    }

    /// Open the first battery found under `root`
    pub fn first<P: AsRef<Path>>(root: P) -> Result<Option<Self>, SourceError> {
        let root = root.as_ref();
        match list_batteries(root)?.first() {
            Some(name) => Ok(Some(Self::open(root, name)?)),
            None => Ok(None),
        }
    }

    /// Directory holding this battery's attributes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn attribute(&self, attr: &str) -> Result<Option<String>, SourceError> {
        let path = self.dir.join(attr);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SourceError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn numeric(&self, attr: &str) -> Result<Option<i64>, SourceError> {
        self.attribute(attr)?
            .map(|value| {
                value.parse::<i64>().map_err(|_| {
                    SourceError::Parse(format!("{}/{}: '{}'", self.name, attr, value))
                })
            })
            .transpose()
    }

    /// Level and scale, preferring `capacity` over energy/charge counters
    fn level_and_scale(&self) -> Result<(i64, i64), SourceError> {
        if let Some(capacity) = self.numeric("capacity")? {
            return Ok((capacity, 100));
        }

        for (now, full) in [("energy_now", "energy_full"), ("charge_now", "charge_full")] {
            if let (Some(level), Some(scale)) = (self.numeric(now)?, self.numeric(full)?) {
                return Ok((level, scale));
            }
        }

        Err(SourceError::Read {
            path: self.dir.display().to_string(),
            message: "no capacity, energy or charge attributes".to_string(),
        })
    }
}

impl BatterySource for SysfsSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<RawBatteryReading, SourceError> {
        let (level, scale) = self.level_and_scale()?;

        let status = match self.attribute("status")? {
            Some(word) => word.parse::<ChargeStatus>().unwrap_or_else(|e| {
                log::debug!("{}: {}, treating as unknown", self.name, e);
                ChargeStatus::Unknown
            }),
            None => ChargeStatus::Unknown,
        };

        Ok(RawBatteryReading::new(level, scale, status))
    }
}

/// List battery names under `root`, sorted
///
/// Only entries whose `type` attribute is `Battery` are returned, so mains
/// adapters and peripheral supplies are skipped.
pub fn list_batteries<P: AsRef<Path>>(root: P) -> Result<Vec<String>, SourceError> {
    let root = root.as_ref();
    let entries = fs::read_dir(root).map_err(|e| SourceError::Read {
        path: root.display().to_string(),
        message: e.to_string(),
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            fs::read_to_string(entry.path().join("type"))
                .map(|kind| kind.trim() == "Battery")
                .unwrap_or(false)
        })
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    names.sort();
    Ok(names)
}
