//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Battery charge guard
///
/// Notifies once the battery reaches 80% while plugged in.
#[derive(Parser, Debug)]
#[command(name = "battguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BATTGUARD_CONFIG")]
    pub config: Option<String>,

    /// Battery name (e.g. BAT0); defaults to the first battery found
    #[arg(short, long, global = true)]
    pub battery: Option<String>,

    /// Power supply class directory
    #[arg(long, global = true, value_name = "DIR")]
    pub sysfs_root: Option<String>,

    /// Disable desktop notifications
    #[arg(long, global = true)]
    pub no_desktop: bool,

    /// Disable colors in terminal notifications
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current battery status
    Status(StatusArgs),

    /// Watch the battery and notify at 80% while charging
    Watch(WatchArgs),

    /// Feed recorded readings through the alert monitor
    Replay {
        /// File with one `level,scale,status` reading per line
        file: PathBuf,
    },

    /// List detected batteries
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Keep refreshing and alert like the watch loop
    #[arg(short, long)]
    pub follow: bool,

    /// Refresh interval in seconds (with --follow)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Polling interval in seconds
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Run once and exit (single-use mode)
    #[arg(long)]
    pub single_use: bool,

    /// Do not announce that monitoring started
    #[arg(long)]
    pub no_announce: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
