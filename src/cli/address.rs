//! Address command handler
//!
//! Reverse geocodes a coordinate against the configured gazetteer.

use crate::config::Config;
use crate::coord::RawCoordinates;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::gazetteer::Gazetteer;
use crate::geo::{GeocodeRequest, GeocodingFacade, Locale};
use crate::messages::ConfiguredMessages;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Address command arguments
#[derive(Args)]
pub struct AddressArgs {
    /// Latitude (decimal degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude (decimal degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,

    /// Maximum number of addresses
    #[arg(long, short = 'l', allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Locale tag for address text, e.g. en-GB
    #[arg(long)]
    pub locale: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Provider deadline in seconds (0 disables)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the address command
pub async fn run(args: AddressArgs, config: &Config) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let format = args.format.unwrap_or_else(|| config.output.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    // Both halves or nothing; a lone half is reported as a missing location
    let coordinates = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(RawCoordinates::new(lat, lng)),
        _ => None,
    };

    let mut request = GeocodeRequest::from_config(coordinates, &config.geocoding);
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(locale) = args.locale {
        request = request.with_locale(Locale::new(locale));
    }

    let gazetteer = Gazetteer::from_config(config)?;
    if gazetteer.is_empty() {
        warn!("No [[places]] configured; the gazetteer cannot answer lookups");
    }

    let timeout = match args.timeout {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => config.timeout(),
    };

    let facade = GeocodingFacade::new(gazetteer)
        .with_messages(Arc::new(ConfiguredMessages::from_config(&config.messages)?))
        .with_timeout(timeout);

    let rendered = facade.resolve(&request).await;
    print!("{}", formatter.format_addresses(&rendered)?);

    super::exit_on_failure(rendered.status());
    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
