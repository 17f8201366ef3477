//! Centralized constants for the geo-facade crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters (WGS84 approximation)
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Southernmost legal latitude
    pub const LAT_MIN: f64 = -90.0;

    /// Northernmost legal latitude
    pub const LAT_MAX: f64 = 90.0;

    /// Westernmost legal longitude
    pub const LNG_MIN: f64 = -180.0;

    /// Easternmost legal longitude
    pub const LNG_MAX: f64 = 180.0;
}

/// Rendering constants
pub mod render {
    /// Decimal digits kept when printing a coordinate
    pub const COORDINATE_DIGITS: usize = 4;

    /// Line terminator for rendered address blocks
    pub const LINE_TERMINATOR: &str = "\n";

    /// Placeholder replaced by the 1-based record index in address headings
    pub const INDEX_PLACEHOLDER: &str = "{n}";
}

/// Locale fallbacks
pub mod locale {
    /// Locale used when the environment doesn't name one
    pub const FALLBACK_LOCALE: &str = "en-US";

    /// Environment variables consulted for the system locale, in order
    pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];
}
