//! Coordinate types and the shared checks applied to them
//!
//! This module handles:
//! - The validated `Coordinates` value type
//! - Raw caller input that may still be text (`RawDegrees`, `RawCoordinates`)
//! - Range/parse validation shared by every facade
//! - Display rounding and great-circle distance

pub mod distance;
pub mod format;
pub mod validate;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use validate::{Axis, Validation};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if validate::validate_latitude(self.lat) != Validation::Pass {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if validate::validate_longitude(self.lng) != Validation::Pass {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format::format_coordinate(self.lat),
            format::format_coordinate(self.lng)
        )
    }
}

/// A single latitude or longitude exactly as the caller handed it over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDegrees {
    Numeric(f64),
    Text(String),
}

impl RawDegrees {
    /// Run the shared validator for the given axis
    pub fn validate(&self, axis: Axis) -> Validation {
        match self {
            Self::Numeric(value) => axis.validate(*value),
            Self::Text(text) => axis.validate_str(text),
        }
    }

    /// Numeric value, if this is a number or text that parses as one
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(text) => validate::parse_degrees(text),
        }
    }
}

impl From<f64> for RawDegrees {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for RawDegrees {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawDegrees {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Unvalidated latitude/longitude pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinates {
    pub lat: RawDegrees,
    pub lng: RawDegrees,
}

impl RawCoordinates {
    /// Create raw coordinates from anything convertible to degrees
    pub fn new(lat: impl Into<RawDegrees>, lng: impl Into<RawDegrees>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Convert into checked coordinates
    ///
    /// Returns the first failing axis check (latitude before longitude).
    pub fn resolve(&self) -> std::result::Result<Coordinates, (Axis, Validation)> {
        for (axis, raw) in [(Axis::Latitude, &self.lat), (Axis::Longitude, &self.lng)] {
            let check = raw.validate(axis);
            if check != Validation::Pass {
                return Err((axis, check));
            }
        }
        match (self.lat.value(), self.lng.value()) {
            (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
            (None, _) => Err((Axis::Latitude, Validation::Unparseable)),
            (_, None) => Err((Axis::Longitude, Validation::Unparseable)),
        }
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(coords: Coordinates) -> Self {
        Self::new(coords.lat, coords.lng)
    }
}
