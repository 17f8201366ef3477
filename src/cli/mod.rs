//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod address;
pub mod config;
pub mod locate;
pub mod validate;

use crate::config::Config;
use crate::error::Result;
use crate::outcome::Status;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit code for validation and service failures
pub const EXIT_FAILURE_STATUS: i32 = 2;

/// Coordinate validation and reverse geocoding
#[derive(Parser)]
#[command(name = "geo-facade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the XDG default
    #[arg(long = "config-file", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log facade decisions to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the addresses nearest to a coordinate
    Address(address::AddressArgs),

    /// Show the last known location for a provider
    Locate(locate::LocateArgs),

    /// Check latitude/longitude values without looking anything up
    Validate(validate::ValidateArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match &cli.config_file {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Address(args) => address::run(args, &Config::load_from(&config_path)?).await,
        Commands::Locate(args) => locate::run(args, &Config::load_from(&config_path)?),
        Commands::Validate(args) => validate::run(args),
        Commands::Config(args) => config::run(args, &config_path),
    }
}

/// Initialize logging; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Leave with a non-zero code for validation or service failures
///
/// Empty outcomes (`NO_RESULTS`, `LOCATION_NOT_FOUND`) exit normally.
fn exit_on_failure(status: Status) {
    if status.is_error() {
        std::process::exit(EXIT_FAILURE_STATUS);
    }
}
