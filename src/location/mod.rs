//! Last known location lookup
//!
//! The positioning subsystem is external: it is reached through the
//! [`LocationSource`] trait, which hands back cached readings without
//! requesting a new fix.

pub mod facade;
pub mod memory;

pub use facade::LocationFacade;

use crate::coord::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named sources of position fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    /// Satellite positioning
    Gps,
    /// Cell tower and Wi-Fi positioning
    Network,
    /// Fixes requested by other consumers, shared without extra cost
    Passive,
}

impl LocationProvider {
    /// All legal providers
    pub fn all() -> [LocationProvider; 3] {
        [Self::Gps, Self::Network, Self::Passive]
    }
}

impl fmt::Display for LocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gps => write!(f, "gps"),
            Self::Network => write!(f, "network"),
            Self::Passive => write!(f, "passive"),
        }
    }
}

impl std::str::FromStr for LocationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gps" => Ok(Self::Gps),
            "network" => Ok(Self::Network),
            "passive" => Ok(Self::Passive),
            _ => Err(format!("Unknown location provider: {}", s)),
        }
    }
}

/// A last known reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub coords: Coordinates,
    pub provider: LocationProvider,

    /// Horizontal accuracy radius in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,

    /// When the reading was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Fix {
    /// Create a reading with no accuracy or timestamp
    pub fn new(coords: Coordinates, provider: LocationProvider) -> Self {
        Self {
            coords,
            provider,
            accuracy_m: None,
            recorded_at: None,
        }
    }

    /// Set the accuracy radius
    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// Set the reading time
    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }
}

/// Trait for positioning subsystems that cache readings per provider
///
/// Implementations must be thread-safe (Send + Sync); the facade may be
/// called from several threads at once.
pub trait LocationSource: Send + Sync {
    /// Most recent cached reading for `provider`, if one was ever recorded
    fn last_known(&self, provider: LocationProvider) -> Option<Fix>;
}

/// Parameters for one location lookup
#[derive(Clone, Copy)]
pub struct LocationRequest<'a> {
    provider_name: Option<&'a str>,
    source: Option<&'a dyn LocationSource>,
}

impl<'a> LocationRequest<'a> {
    /// Request whose parts may be missing
    pub fn new(provider_name: Option<&'a str>, source: Option<&'a dyn LocationSource>) -> Self {
        Self {
            provider_name,
            source,
        }
    }

    /// Request with both parts present
    pub fn for_provider(provider_name: &'a str, source: &'a dyn LocationSource) -> Self {
        Self::new(Some(provider_name), Some(source))
    }

    pub fn provider_name(&self) -> Option<&'a str> {
        self.provider_name
    }

    pub fn source(&self) -> Option<&'a dyn LocationSource> {
        self.source
    }
}

impl fmt::Debug for LocationRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationRequest")
            .field("provider_name", &self.provider_name)
            .field("source", &self.source.map(|_| "<location source>"))
            .finish()
    }
}
