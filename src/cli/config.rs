//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::Path;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "geocoding.limit")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs, config_path: &Path) -> Result<()> {
    // Show path
    if args.path {
        println!("{}", config_path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        Config::default().save_to(config_path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            let content = toml::to_string_pretty(&config)
                .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
            print!("{}", content);
        }

        // Key only: show that value
        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::available_keys().join(", ")
                ))
            })?;
            println!("{}", value);
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(config_path)?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}
