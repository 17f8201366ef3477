//! Locate command handler
//!
//! Reads the last known reading for a provider from `[location.fixes]`.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::location::memory::MemoryLocationSource;
use crate::location::{LocationFacade, LocationProvider, LocationRequest};
use crate::messages::ConfiguredMessages;
use clap::Args;
use std::sync::Arc;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Location provider: gps, network or passive
    #[arg(long, short = 'p')]
    pub provider: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// List available providers
    #[arg(short = 'P', long = "list-providers")]
    pub list_providers: bool,
}

/// Run the locate command
pub fn run(args: LocateArgs, config: &Config) -> Result<()> {
    if args.list_providers {
        list_providers(config);
        return Ok(());
    }

    let format = args.format.unwrap_or_else(|| config.output.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let source = MemoryLocationSource::from_config(&config.location)?;
    let provider = args
        .provider
        .unwrap_or_else(|| config.location.provider.clone());

    let facade = LocationFacade::new()
        .with_messages(Arc::new(ConfiguredMessages::from_config(&config.messages)?));
    let rendered = facade.resolve(&LocationRequest::for_provider(&provider, &source));

    print!("{}", formatter.format_location(&rendered)?);

    super::exit_on_failure(rendered.status());
    Ok(())
}

/// Print providers and whether a reading is configured for each
fn list_providers(config: &Config) {
    println!("Available location providers:");
    for provider in LocationProvider::all() {
        let seeded = config
            .location
            .fixes
            .keys()
            .any(|name| name.eq_ignore_ascii_case(&provider.to_string()));
        println!(
            "  {:8}{}",
            provider.to_string(),
            if seeded { "(reading configured)" } else { "" }
        );
    }
}
