//! Offline gazetteer backend
//!
//! Answers reverse geocoding lookups from a fixed list of known places,
//! nearest first, within a search radius. Places usually come from the
//! `[[places]]` config section.

use crate::config::Config;
use crate::coord::distance::haversine_distance;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{AddressRecord, Locale, ReverseGeocoder};
use tracing::debug;

/// A named place with its address
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub coords: Coordinates,
    pub address: AddressRecord,
}

impl Place {
    /// Create a place; a missing address line is filled with the name
    pub fn new(name: impl Into<String>, coords: Coordinates, mut address: AddressRecord) -> Self {
        let name = name.into();
        if address.address_line.is_none() {
            address.address_line = Some(name.clone());
        }
        Self {
            name,
            coords,
            address,
        }
    }
}

/// Nearest-known-place reverse geocoder
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Place>,
    max_distance_m: f64,
}

impl Gazetteer {
    /// Create a gazetteer over the given places
    pub fn new(places: Vec<Place>, max_distance_m: f64) -> Self {
        Self {
            places,
            max_distance_m,
        }
    }

    /// Build from the `[[places]]` and `[geocoding]` config sections
    ///
    /// Places with out-of-range coordinates are a configuration error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let places = config
            .places
            .iter()
            .map(|p| {
                let coords = Coordinates::new(p.lat, p.lng);
                coords.validate().map_err(|e| {
                    Error::Config(format!("Place '{}': {}", p.name, e))
                })?;
                Ok(Place::new(
                    p.name.clone(),
                    coords,
                    AddressRecord {
                        address_line: p.address_line.clone(),
                        locality: p.locality.clone(),
                        postal_code: p.postal_code.clone(),
                        country_name: p.country_name.clone(),
                    },
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(places, config.geocoding.max_distance_m))
    }

    /// Number of known places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True if no places are known
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Places within range of `target`, nearest first, with distances in meters
    pub fn nearest(&self, target: Coordinates, limit: usize) -> Vec<(&Place, f64)> {
        let mut hits: Vec<(&Place, f64)> = self
            .places
            .iter()
            .map(|place| (place, haversine_distance(target, place.coords)))
            .filter(|(_, distance)| *distance <= self.max_distance_m)
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.truncate(limit);
        hits
    }
}

impl ReverseGeocoder for Gazetteer {
    fn name(&self) -> &str {
        "gazetteer"
    }

    async fn lookup(
        &self,
        lat: f64,
        lng: f64,
        limit: usize,
        _locale: &Locale,
    ) -> Result<Option<Vec<AddressRecord>>> {
        let target = Coordinates::new(lat, lng);
        target.validate()?;

        if self.places.is_empty() {
            return Err(Error::ServiceUnavailable(
                "Gazetteer has no places configured".to_string(),
            ));
        }

        let hits = self.nearest(target, limit);
        debug!("Gazetteer found {} place(s) near {}", hits.len(), target);

        Ok(Some(
            hits.into_iter()
                .map(|(place, _)| place.address.clone())
                .collect(),
        ))
    }
}
