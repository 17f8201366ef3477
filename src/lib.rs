//! geo-facade: coordinate validation and reverse geocoding facade
//!
//! Turns raw coordinates into either a request against an injected reverse
//! geocoding provider or a well-defined status with a presentable message.
//!
//! ## Features
//!
//! - One shared latitude/longitude validator for numeric and text input
//! - Reverse geocoding facade with a fixed validation order and a closed
//!   outcome taxonomy
//! - Last known location facade over an injected location source
//! - Host-supplied status messages, offline gazetteer backend, CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_facade::coord::{Coordinates, RawCoordinates};
//! use geo_facade::geo::gazetteer::{Gazetteer, Place};
//! use geo_facade::geo::{AddressRecord, GeocodeRequest, GeocodingFacade};
//! use geo_facade::outcome::Status;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let gazetteer = Gazetteer::new(
//!     vec![Place::new(
//!         "Baker Street",
//!         Coordinates::new(51.5238, -0.1586),
//!         AddressRecord::new("221B Baker St", "London", "NW1", "UK"),
//!     )],
//!     5_000.0,
//! );
//! let facade = GeocodingFacade::new(gazetteer);
//!
//! let request = GeocodeRequest::at(RawCoordinates::new("51.5237", "-0.1585"));
//! let rendered = facade.resolve(&request).await;
//! assert_eq!(rendered.status(), Status::Ok);
//! assert_eq!(rendered.text(), "221B Baker St\nLondon\nNW1\nUK\n");
//! # });
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod location;
pub mod messages;
pub mod outcome;

// Re-export commonly used types
pub use config::Config;
pub use coord::{Coordinates, RawCoordinates, RawDegrees};
pub use error::{Error, Result};
pub use geo::{AddressRecord, GeocodeRequest, GeocodingFacade, ReverseGeocoder};
pub use location::{Fix, LocationFacade, LocationProvider, LocationRequest, LocationSource};
pub use outcome::{Failure, Rendered, Status};
