//! Reverse geocoding
//!
//! Defines the provider capability the facade delegates to, the address
//! records it returns, and the facade itself.

pub mod facade;
pub mod gazetteer;
pub mod request;

pub use facade::GeocodingFacade;
pub use request::GeocodeRequest;

use crate::constants::locale::{FALLBACK_LOCALE, LOCALE_ENV_VARS};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One address returned by a reverse geocoding provider
///
/// Any field may be missing; rendering prints an empty line for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

impl AddressRecord {
    /// Create a record with every field present
    pub fn new(
        address_line: impl Into<String>,
        locality: impl Into<String>,
        postal_code: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            address_line: Some(address_line.into()),
            locality: Some(locality.into()),
            postal_code: Some(postal_code.into()),
            country_name: Some(country_name.into()),
        }
    }

    /// Fields in rendering order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.address_line.as_deref().unwrap_or_default(),
            self.locality.as_deref().unwrap_or_default(),
            self.postal_code.as_deref().unwrap_or_default(),
            self.country_name.as_deref().unwrap_or_default(),
        ]
    }
}

/// Language tag for address text, e.g. `en-US`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Locale named by the environment, or `en-US`
    pub fn system() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::from_posix(&value))
            .unwrap_or_else(|| Self::new(FALLBACK_LOCALE))
    }

    /// Convert a POSIX locale value (`de_DE.UTF-8@euro`) into a tag (`de-DE`)
    ///
    /// Returns `None` for empty values and the `C`/`POSIX` locales.
    pub fn from_posix(value: &str) -> Option<Self> {
        let base = value
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }
        Some(Self::new(base.replace('_', "-")))
    }

    /// The tag
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for reverse geocoding providers
///
/// Errors are reported through [`crate::error::Error`]:
/// `InvalidCoordinates` when the provider rejects the position, anything else
/// when it can't be reached or fails.
pub trait ReverseGeocoder: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    /// Resolve a position to at most `limit` addresses
    ///
    /// `Ok(None)` and an empty vector both mean nothing was found.
    fn lookup(
        &self,
        lat: f64,
        lng: f64,
        limit: usize,
        locale: &Locale,
    ) -> impl std::future::Future<Output = Result<Option<Vec<AddressRecord>>>> + Send;
}
