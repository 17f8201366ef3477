//! Error types for geo-facade

use thiserror::Error;

/// Main error type for geo-facade operations
///
/// Facades never return this type to their callers; they fold it into an
/// [`crate::outcome::Status`]. It is what providers, config loading and the
/// CLI speak.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for geo-facade operations
pub type Result<T> = std::result::Result<T, Error>;
