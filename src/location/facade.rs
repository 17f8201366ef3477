//! Location lookup facade

use crate::coord::format::format_coordinate;
use crate::coord::validate::{validate_latitude, validate_longitude, Validation};
use crate::location::{Fix, LocationProvider, LocationRequest};
use crate::messages::{DefaultMessages, MessageCatalog};
use crate::outcome::{Failure, Rendered};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates a [`LocationRequest`] and reads the source's last known fix
///
/// The fix is returned to the caller as the payload; nothing is kept here.
#[derive(Clone)]
pub struct LocationFacade {
    messages: Arc<dyn MessageCatalog>,
}

impl LocationFacade {
    /// Create a facade with English messages
    pub fn new() -> Self {
        Self {
            messages: Arc::new(DefaultMessages),
        }
    }

    /// Use a different message catalog
    pub fn with_messages(mut self, messages: Arc<dyn MessageCatalog>) -> Self {
        self.messages = messages;
        self
    }

    /// Resolve a request that is known to be present
    pub fn resolve(&self, request: &LocationRequest<'_>) -> Rendered<Fix> {
        self.resolve_location(Some(request))
    }

    /// Look up the last known position for the requested provider
    ///
    /// A missing reading yields `LOCATION_NOT_FOUND`, which is an empty
    /// outcome rather than a validation failure.
    pub fn resolve_location(&self, request: Option<&LocationRequest<'_>>) -> Rendered<Fix> {
        let request = match request {
            Some(request) => request,
            None => return self.fail(Failure::ParamsMissing),
        };
        let Some(source) = request.source() else {
            return self.fail(Failure::ServiceUnavailable);
        };
        let provider = match parse_provider(request.provider_name()) {
            Ok(provider) => provider,
            Err(failure) => return self.fail(failure),
        };

        let Some(fix) = source.last_known(provider) else {
            debug!("No last known reading for provider {}", provider);
            return self.fail(Failure::LocationNotFound);
        };

        // Readings are held to the same bounds as request input
        let lat = validate_latitude(fix.coords.lat);
        let lng = validate_longitude(fix.coords.lng);
        if lat != Validation::Pass || lng != Validation::Pass {
            warn!(
                "{} source reported an impossible reading ({}, {})",
                provider, fix.coords.lat, fix.coords.lng
            );
            return self.fail(Failure::CoordinateOutOfRange);
        }

        let text = render_fix(&fix);
        Rendered::success(fix, text)
    }

    fn fail<T>(&self, failure: Failure) -> Rendered<T> {
        if failure.status().is_error() {
            debug!("Location request rejected: {}", failure.status());
        }
        Rendered::failure(failure, self.messages.message(failure.status()))
    }
}

impl Default for LocationFacade {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank names count as missing
fn parse_provider(name: Option<&str>) -> Result<LocationProvider, Failure> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(Failure::ProviderMissing)?;
    LocationProvider::from_str(name).map_err(|_| Failure::ProviderInvalid)
}

/// `"lat, lng"` with each axis rounded to 4 digits
pub fn render_fix(fix: &Fix) -> String {
    format!(
        "{}, {}",
        format_coordinate(fix.coords.lat),
        format_coordinate(fix.coords.lng)
    )
}
