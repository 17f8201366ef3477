//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of addresses requested from the provider
pub const DEFAULT_LIMIT: i64 = 1;

/// Default deadline around a provider call, in seconds (0 disables it)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default gazetteer search radius in meters
pub const DEFAULT_MAX_DISTANCE_M: f64 = 25_000.0;

/// Default location provider for `locate`
pub const DEFAULT_PROVIDER: &str = "gps";

/// Default heading placed before each record of a multi-address listing
pub const DEFAULT_ADDRESS_HEADING: &str = "Address {n}";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geo-facade";
