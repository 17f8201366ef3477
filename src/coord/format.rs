//! Coordinate display formatting
//!
//! Rounds on the shortest decimal representation of the value so that
//! `37.42155` becomes `37.4216` rather than falling victim to binary
//! representation error. Trailing zeros are dropped (`37.5` stays `37.5`).

use crate::constants::render::COORDINATE_DIGITS;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::debug;

/// Format a coordinate with the default number of decimal digits
pub fn format_coordinate(value: f64) -> String {
    format_coordinate_with(value, COORDINATE_DIGITS)
}

/// Format a coordinate rounded half away from zero to `digits` decimals
///
/// Falls back to the unrounded value when it can't be rounded.
pub fn format_coordinate_with(value: f64, digits: usize) -> String {
    match round_decimal(value, digits) {
        Some(formatted) => formatted,
        None => {
            debug!("Could not round coordinate {}, using raw value", value);
            value.to_string()
        }
    }
}

/// Decimal rounding on the shortest representation of `value`
///
/// Returns `None` for values with no decimal form (NaN, ±inf) or beyond
/// `Decimal`'s range.
fn round_decimal(value: f64, digits: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let scale = u32::try_from(digits).ok()?;
    let decimal = Decimal::from_str(&value.to_string()).ok()?;

    // normalize() drops trailing zeros and turns -0 into 0
    let rounded = decimal
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    Some(rounded.to_string())
}
