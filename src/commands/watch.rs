//! Watch command implementation
//!
//! Runs the battery guard until interrupted.

use crate::cli::args::{OutputFormat, WatchArgs};
use crate::cli::output::{print_output, Message};
use crate::commands::common::{build_notifications, install_stop_handler, open_source};
use crate::config::Config;
use crate::error::Result;
use crate::services::{WatchConfig, WatchService};
use crate::source::BatterySource;

/// Execute the watch command
pub fn run_watch(args: &WatchArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let source = open_source(config)?;

    let watch_config = WatchConfig {
        interval: config.general.interval(),
        single_use: args.single_use,
        announce_start: config.notify.announce_start,
    };

    log::debug!("Starting battery watch");
    log::debug!("  Battery: {}", source.name());
    log::debug!("  Interval: {:?}", watch_config.interval);
    log::debug!("  Single use: {}", watch_config.single_use);
    log::debug!("  Announce: {}", watch_config.announce_start);

    let notifications = build_notifications(config);
    let running = install_stop_handler()?;

    let mut service = WatchService::new(watch_config, source, notifications);
    let summary = service.run(&running)?;

    let msg = Message {
        message: format!(
            "Watch finished: {} samples, {} alerts",
            summary.samples, summary.alerts
        ),
        success: true,
    };
    print_output(&msg, format)?;

    Ok(())
}
