//! Replay command implementation
//!
//! Feeds recorded readings through the alert monitor without sleeping or
//! sending notifications, and reports where alerts fired.

use crate::alerts::NotificationManager;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, ReplayAlert, ReplayReport};
use crate::error::Result;
use crate::services::{TickOutcome, WatchConfig, WatchService};
use crate::source::{BatterySource, ReplaySource};

use std::path::Path;
use std::time::Duration;

/// Execute the replay command
pub fn run_replay(file: &Path, format: OutputFormat) -> Result<()> {
    let source = ReplaySource::from_path(file)?;
    let report = replay(source)?;
    print_output(&report, format)?;
    Ok(())
}

/// Run every reading of `source` through a fresh monitor
pub fn replay(source: ReplaySource) -> Result<ReplayReport> {
    let name = source.name().to_string();
    let config = WatchConfig {
        interval: Duration::ZERO,
        single_use: false,
        announce_start: false,
    };
    let mut service = WatchService::new(config, source, NotificationManager::new());

    let mut alerts = Vec::new();
    let mut reading = 0;
    loop {
        reading += 1;
        match service.tick()? {
            TickOutcome::Alerted(event) => alerts.push(ReplayAlert::new(reading, &event)),
            TickOutcome::Observed | TickOutcome::Dropped => {}
            TickOutcome::Exhausted => break,
        }
    }

    Ok(ReplayReport {
        source: name,
        summary: service.summary(),
        alerts,
    })
}
