//! Helpers shared by command handlers

use crate::alerts::{NotificationManager, TerminalNotifier};
use crate::cli::args::{Cli, Commands};
use crate::config::{Config, ConfigBuilder};
use crate::error::{AppError, Result};
use crate::source::SysfsSource;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Merge the config file with command-line overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (interval, no_announce) = match &cli.command {
        Commands::Watch(args) => (args.interval, args.no_announce),
        Commands::Status(args) => (args.interval, false),
        _ => (None, false),
    };

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_battery(cli.battery.clone())
        .with_sysfs_root(cli.sysfs_root.clone())
        .with_desktop(cli.no_desktop.then_some(false))
        .with_color(cli.no_color.then_some(false))
        .with_interval(interval)
        .with_announce_start(no_announce.then_some(false))
        .build()?;

    Ok(config)
}

/// Open the configured battery, or the first one found
pub fn open_source(config: &Config) -> Result<SysfsSource> {
    let root = &config.source.sysfs_root;
    match &config.source.battery {
        Some(name) => Ok(SysfsSource::open(root, name)?),
        None => SysfsSource::first(root)?.ok_or(AppError::NoBatteryFound),
    }
}

/// Build the notification channels enabled in the configuration
pub fn build_notifications(config: &Config) -> NotificationManager {
    let mut manager = NotificationManager::new();

    if config.notify.terminal {
        let terminal = if config.notify.color {
            TerminalNotifier::new()
        } else {
            TerminalNotifier::no_color()
        };
        manager.add_notifier(Box::new(terminal));
    }

    if config.notify.desktop {
        #[cfg(feature = "desktop")]
        manager.add_notifier(Box::new(crate::alerts::DesktopNotifier::new()));

        #[cfg(not(feature = "desktop"))]
        log::warn!("Desktop notifications requested but the `desktop` feature is disabled");
    }

    log::debug!("Notification channels: {:?}", manager.channel_names());
    manager
}

/// Install a Ctrl+C handler that clears the returned flag
pub fn install_stop_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Signal(e.to_string()))?;

    Ok(running)
}
