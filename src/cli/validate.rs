//! Validate command handler
//!
//! Runs the coordinate validator on text input and reports each axis.

use crate::coord::validate::{Axis, Validation};
use crate::error::Result;
use clap::Args;

/// Validate command arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Latitude to check
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude to check
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> Result<()> {
    let checks: Vec<(Axis, String, Validation)> = [
        (Axis::Latitude, args.lat),
        (Axis::Longitude, args.lng),
    ]
    .into_iter()
    .filter_map(|(axis, value)| value.map(|v| (axis, v)))
    .map(|(axis, value)| {
        let check = axis.validate_str(&value);
        (axis, value, check)
    })
    .collect();

    if checks.is_empty() {
        eprintln!("Error: Nothing to validate. Use --lat and/or --lng");
        std::process::exit(1);
    }

    for (axis, value, check) in &checks {
        println!("{:9} {:>14}  {}", axis.to_string(), value, check);
    }

    if checks.iter().any(|(_, _, check)| *check != Validation::Pass) {
        std::process::exit(super::EXIT_FAILURE_STATUS);
    }
    Ok(())
}
