//! battguard - battery charge guard
//!
//! A command-line tool that notifies once the battery reaches 80% while
//! charging.

use battguard::cli::args::{generate_completions, Cli, Commands};
use battguard::commands::common::load_config;
use battguard::commands::{run_list, run_replay, run_status, run_watch};
use battguard::config::Config;
use battguard::error::{AppError, SourceError};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Commands that only render or replay do not read the configuration
    let config = match &cli.command {
        Commands::Completions { .. } | Commands::Replay { .. } => Ok(None),
        _ => load_config(&cli).map(Some),
    };

    // Initialize logging; RUST_LOG still takes precedence
    let level = match &config {
        Ok(Some(config)) => config.general.log_level(),
        _ if cli.verbose => log::LevelFilter::Debug,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .format_timestamp(None)
        .init();

    let result = config.and_then(|config| run(&cli, config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: Option<Config>) -> Result<(), AppError> {
    let config = match (&cli.command, config) {
        (Commands::Completions { shell }, _) => {
            generate_completions(*shell);
            return Ok(());
        }
        (Commands::Replay { file }, _) => return run_replay(file, cli.format),
        (_, Some(config)) => config,
        (_, None) => load_config(cli)?,
    };

    match &cli.command {
        Commands::Status(args) => run_status(args, &config, cli.format),

        Commands::Watch(args) => run_watch(args, &config, cli.format),

        Commands::List => run_list(&config, cli.format),

        Commands::Completions { .. } | Commands::Replay { .. } => Ok(()),
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::NoBatteryFound => {
            eprintln!();
            eprintln!("Hint: No entry with type 'Battery' was found under the power supply root.");
            eprintln!("      Use --sysfs-root or --battery to point at a battery explicitly.");
        }
        AppError::Source(SourceError::NotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Run 'battguard list' to see detected batteries.");
        }
        AppError::Source(SourceError::Read { .. }) => {
            eprintln!();
            eprintln!("Hint: Check that the battery attributes are readable by this user.");
        }
        _ => {}
    }
}
