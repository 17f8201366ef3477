//! In-memory location source
//!
//! Keeps one reading per provider. Hosts push readings in with `record`;
//! the CLI seeds it from `[location.fixes]`.

use crate::config::LocationConfig;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::location::{Fix, LocationProvider, LocationSource};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Thread-safe table of last known readings
#[derive(Debug, Default)]
pub struct MemoryLocationSource {
    fixes: RwLock<HashMap<LocationProvider, Fix>>,
}

impl MemoryLocationSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from config; unknown provider names and bad coordinates are errors
    pub fn from_config(config: &LocationConfig) -> Result<Self> {
        let source = Self::new();
        for (name, seeded) in &config.fixes {
            let provider = LocationProvider::from_str(name)
                .map_err(|e| Error::Config(format!("Invalid [location.fixes] key: {}", e)))?;

            let coords = Coordinates::new(seeded.lat, seeded.lng);
            coords.validate()?;

            let mut fix = Fix::new(coords, provider);
            fix.accuracy_m = seeded.accuracy_m;
            fix.recorded_at = seeded.recorded_at;
            source.record(fix);
        }
        Ok(source)
    }

    /// Store a reading, replacing the previous one for its provider
    pub fn record(&self, fix: Fix) {
        let mut fixes = self.fixes.write().unwrap_or_else(PoisonError::into_inner);
        fixes.insert(fix.provider, fix);
    }

    /// Drop the reading for a provider
    pub fn forget(&self, provider: LocationProvider) -> Option<Fix> {
        let mut fixes = self.fixes.write().unwrap_or_else(PoisonError::into_inner);
        fixes.remove(&provider)
    }
}

impl LocationSource for MemoryLocationSource {
    fn last_known(&self, provider: LocationProvider) -> Option<Fix> {
        let fixes = self.fixes.read().unwrap_or_else(PoisonError::into_inner);
        fixes.get(&provider).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixConfig;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_and_last_known() {
        let source = MemoryLocationSource::new();
        assert!(source.last_known(LocationProvider::Gps).is_none());

        source.record(Fix::new(Coordinates::new(1.0, 2.0), LocationProvider::Gps));
        source.record(Fix::new(Coordinates::new(3.0, 4.0), LocationProvider::Gps));

        let fix = source.last_known(LocationProvider::Gps).unwrap();
        assert_eq!(fix.coords, Coordinates::new(3.0, 4.0));
        assert!(source.last_known(LocationProvider::Network).is_none());
    }

    #[test]
    fn test_forget() {
        let source = MemoryLocationSource::new();
        source.record(Fix::new(Coordinates::new(1.0, 2.0), LocationProvider::Passive));
        assert!(source.forget(LocationProvider::Passive).is_some());
        assert!(source.last_known(LocationProvider::Passive).is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = LocationConfig::default();
        config.fixes.insert(
            "NETWORK".to_string(),
            FixConfig {
                lat: 48.8584,
                lng: 2.2945,
                accuracy_m: Some(40.0),
                recorded_at: None,
            },
        );

        let source = MemoryLocationSource::from_config(&config).unwrap();
        let fix = source.last_known(LocationProvider::Network).unwrap();
        assert_eq!(fix.accuracy_m, Some(40.0));
    }

    #[test]
    fn test_from_config_rejects_bad_entries() {
        let mut config = LocationConfig::default();
        config.fixes.insert(
            "bluetooth".to_string(),
            FixConfig {
                lat: 0.0,
                lng: 0.0,
                accuracy_m: None,
                recorded_at: None,
            },
        );
        assert!(MemoryLocationSource::from_config(&config).is_err());

        let mut config = LocationConfig::default();
        config.fixes.insert(
            "gps".to_string(),
            FixConfig {
                lat: 0.0,
                lng: 200.0,
                accuracy_m: None,
                recorded_at: None,
            },
        );
        assert!(MemoryLocationSource::from_config(&config).is_err());
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let source = Arc::new(MemoryLocationSource::new());
        source.record(Fix::new(Coordinates::new(0.0, 0.0), LocationProvider::Gps));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let source = Arc::clone(&source);
                thread::spawn(move || {
                    for j in 0..100_i32 {
                        if i == 0 {
                            let lat = f64::from(j) / 10.0;
                            let fix = Fix::new(Coordinates::new(lat, 0.0), LocationProvider::Gps);
                            source.record(fix);
                        } else {
                            assert!(source.last_known(LocationProvider::Gps).is_some());
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(
            source.last_known(LocationProvider::Gps).unwrap().coords.lat,
            9.9
        );
    }
}
