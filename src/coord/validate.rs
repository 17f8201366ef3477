//! Coordinate range and parse validation
//!
//! The only bound check in the crate. Both facades and `Coordinates::validate`
//! go through here.

use crate::constants::geo::{LAT_MAX, LAT_MIN, LNG_MAX, LNG_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating one coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Validation {
    /// Value lies inside the closed legal range
    Pass,
    /// Text could not be parsed as a decimal number
    Unparseable,
    /// Value parsed (or was numeric) but lies outside the legal range
    OutOfRange,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Unparseable => write!(f, "UNPARSEABLE"),
            Self::OutOfRange => write!(f, "OUT_OF_RANGE"),
        }
    }
}

/// Which half of a coordinate pair is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Closed legal range `(min, max)` for this axis
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Latitude => (LAT_MIN, LAT_MAX),
            Self::Longitude => (LNG_MIN, LNG_MAX),
        }
    }

    /// Check a numeric value against this axis' range
    pub fn validate(self, value: f64) -> Validation {
        let (min, max) = self.bounds();
        if value >= min && value <= max {
            Validation::Pass
        } else {
            Validation::OutOfRange
        }
    }

    /// Parse text, then check the range
    pub fn validate_str(self, text: &str) -> Validation {
        match parse_degrees(text) {
            Some(value) => self.validate(value),
            None => Validation::Unparseable,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Locale-invariant decimal parse
///
/// Surrounding whitespace is ignored. Non-finite results ("NaN", "inf") are
/// not degrees and count as unparseable.
pub fn parse_degrees(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Latitude validator
pub fn validate_latitude(lat: f64) -> Validation {
    Axis::Latitude.validate(lat)
}

/// Latitude validator for text input
pub fn validate_latitude_str(lat: &str) -> Validation {
    Axis::Latitude.validate_str(lat)
}

/// Longitude validator
pub fn validate_longitude(lng: f64) -> Validation {
    Axis::Longitude.validate(lng)
}

/// Longitude validator for text input
pub fn validate_longitude_str(lng: &str) -> Validation {
    Axis::Longitude.validate_str(lng)
}
