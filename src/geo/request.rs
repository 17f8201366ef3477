//! Reverse geocoding request

use crate::config::defaults::DEFAULT_LIMIT;
use crate::config::GeocodingConfig;
use crate::coord::RawCoordinates;
use crate::geo::Locale;
use serde::{Deserialize, Serialize};

/// Parameters for one reverse geocoding call
///
/// Built once and not changed afterwards. `limit` defaults to 1 and `locale`
/// to the system locale. Nothing is validated here; the facade validates on
/// use so every problem surfaces as a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRequest {
    coordinates: Option<RawCoordinates>,
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    locale: Locale,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl GeocodeRequest {
    /// Request for a position that may be missing
    pub fn new(coordinates: Option<RawCoordinates>) -> Self {
        Self {
            coordinates,
            limit: DEFAULT_LIMIT,
            locale: Locale::system(),
        }
    }

    /// Request for a known position
    pub fn at(coordinates: impl Into<RawCoordinates>) -> Self {
        Self::new(Some(coordinates.into()))
    }

    /// Request using the configured limit and locale
    pub fn from_config(coordinates: Option<RawCoordinates>, config: &GeocodingConfig) -> Self {
        let request = Self::new(coordinates).with_limit(config.limit);
        match &config.locale {
            Some(tag) => request.with_locale(Locale::new(tag.clone())),
            None => request,
        }
    }

    /// Set the maximum number of addresses to return
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the locale for address text
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn coordinates(&self) -> Option<&RawCoordinates> {
        self.coordinates.as_ref()
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;

    #[test]
    fn test_defaults() {
        let request = GeocodeRequest::at(Coordinates::new(1.0, 2.0));
        assert_eq!(request.limit(), 1);
        assert_eq!(request.locale(), &Locale::system());
        assert!(request.coordinates().is_some());
    }

    #[test]
    fn test_overrides() {
        let request = GeocodeRequest::at(RawCoordinates::new("1.0", "2.0"))
            .with_limit(5)
            .with_locale(Locale::new("ja-JP"));
        assert_eq!(request.limit(), 5);
        assert_eq!(request.locale().as_str(), "ja-JP");
    }

    #[test]
    fn test_from_config() {
        let config = GeocodingConfig {
            limit: 3,
            locale: Some("pt-BR".to_string()),
            ..GeocodingConfig::default()
        };
        let request = GeocodeRequest::from_config(None, &config);
        assert!(request.coordinates().is_none());
        assert_eq!(request.limit(), 3);
        assert_eq!(request.locale().as_str(), "pt-BR");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let request: GeocodeRequest =
            serde_json::from_str(r#"{"coordinates": {"lat": "10.5", "lng": 20.0}}"#).unwrap();
        assert_eq!(request.limit(), 1);
        assert!(request.coordinates().is_some());
    }
}
