//! Status command implementation
//!
//! Shows the current battery reading, optionally refreshing it.

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::cli::output::{print_output, BatteryStatus};
use crate::commands::common::{build_notifications, install_stop_handler, open_source};
use crate::config::Config;
use crate::domain::PowerSample;
use crate::error::Result;
use crate::services::watch::sleep_while_running;
use crate::services::StatusView;
use crate::source::BatterySource;

use std::sync::atomic::Ordering;

/// Execute the status command
pub fn run_status(args: &StatusArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let mut source = open_source(config)?;
    let mut view = StatusView::new();

    if !args.follow {
        let raw = source.read()?;
        let sample = PowerSample::from_raw(&raw)?;
        view.update(sample);
        let status = BatteryStatus::new(source.name(), &raw, &sample, view.headline());
        print_output(&status, format)?;
        return Ok(());
    }

    let interval = config.general.interval();
    let notifications = build_notifications(config);
    let running = install_stop_handler()?;

    while running.load(Ordering::SeqCst) {
        match view.refresh(&mut source, &notifications) {
            Ok(Some(raw)) => {
                if let Some(sample) = view.latest() {
                    let status =
                        BatteryStatus::new(source.name(), &raw, &sample, view.headline());
                    print_output(&status, format)?;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Battery read failed: {}", e),
        }

        sleep_while_running(interval, &running);
    }

    Ok(())
}
