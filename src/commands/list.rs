//! List command implementation

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, BatteryList};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::source::list_batteries;

/// Execute the list command
pub fn run_list(config: &Config, format: OutputFormat) -> Result<()> {
    let root = &config.source.sysfs_root;
    let batteries = list_batteries(root)?;

    if batteries.is_empty() {
        return Err(AppError::NoBatteryFound);
    }

    let list = BatteryList {
        root: root.clone(),
        batteries,
    };

    print_output(&list, format)?;
    Ok(())
}
