//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/geo-facade/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Reverse geocoding settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Location lookup settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Status message overrides
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Known places served by the offline gazetteer
    #[serde(default)]
    pub places: Vec<PlaceConfig>,
}

/// Reverse geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Default number of addresses to request
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Locale tag for address text (system locale when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Deadline around the provider call in seconds, 0 to disable
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Gazetteer search radius in meters
    #[serde(default = "default_max_distance")]
    pub max_distance_m: f64,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Location lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Provider used when none is given
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Last known readings keyed by provider name
    #[serde(default)]
    pub fixes: BTreeMap<String, FixConfig>,
}

/// A seeded last known reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixConfig {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// A gazetteer entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

/// Status message overrides
///
/// Any key other than `address_heading` must name a status, e.g.
/// `NO_RESULTS = "Nothing around here"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Heading before each record of a multi-address listing, `{n}` is the index
    #[serde(default = "default_address_heading")]
    pub address_heading: String,

    /// Per-status message text
    #[serde(flatten)]
    pub overrides: BTreeMap<String, String>,
}

// Default value functions for serde
fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE_M
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}
fn default_address_heading() -> String {
    DEFAULT_ADDRESS_HEADING.to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            locale: None,
            timeout_secs: default_timeout_secs(),
            max_distance_m: default_max_distance(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            fixes: BTreeMap::new(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            address_heading: default_address_heading(),
            overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoding", "limit"] => Some(self.geocoding.limit.to_string()),
            ["geocoding", "locale"] => Some(self.geocoding.locale.clone().unwrap_or_default()),
            ["geocoding", "timeout_secs"] => Some(self.geocoding.timeout_secs.to_string()),
            ["geocoding", "max_distance_m"] => Some(self.geocoding.max_distance_m.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["location", "provider"] => Some(self.location.provider.clone()),

            ["messages", "address_heading"] => Some(self.messages.address_heading.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoding", "limit"] => {
                self.geocoding.limit = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid limit value: {}", value)))?;
            }
            ["geocoding", "locale"] => {
                self.geocoding.locale = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            ["geocoding", "timeout_secs"] => {
                self.geocoding.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }
            ["geocoding", "max_distance_m"] => {
                self.geocoding.max_distance_m = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid distance value: {}", value)))?;
            }

            ["output", "format"] => {
                self.output.format = value.to_string();
            }

            ["location", "provider"] => {
                self.location.provider = value.to_string();
            }

            ["messages", "address_heading"] => {
                self.messages.address_heading = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "geocoding.limit",
            "geocoding.locale",
            "geocoding.timeout_secs",
            "geocoding.max_distance_m",
            "output.format",
            "location.provider",
            "messages.address_heading",
        ]
    }

    /// Provider deadline, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        match self.geocoding.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
