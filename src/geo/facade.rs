//! Reverse geocoding facade
//!
//! Validates a [`GeocodeRequest`], makes exactly one provider call, and turns
//! whatever happens into a [`Rendered`] address listing or message. Nothing
//! escapes as an error.

use crate::constants::render::LINE_TERMINATOR;
use crate::coord::validate::Validation;
use crate::coord::Coordinates;
use crate::error::Error;
use crate::geo::{AddressRecord, GeocodeRequest, ReverseGeocoder};
use crate::messages::{DefaultMessages, MessageCatalog};
use crate::outcome::{Failure, Rendered};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Facade over an injected reverse geocoding provider
pub struct GeocodingFacade<G> {
    provider: G,
    messages: Arc<dyn MessageCatalog>,
    timeout: Option<Duration>,
}

impl<G: ReverseGeocoder> GeocodingFacade<G> {
    /// Create a facade with English messages and no deadline
    pub fn new(provider: G) -> Self {
        Self {
            provider,
            messages: Arc::new(DefaultMessages),
            timeout: None,
        }
    }

    /// Use a different message catalog
    pub fn with_messages(mut self, messages: Arc<dyn MessageCatalog>) -> Self {
        self.messages = messages;
        self
    }

    /// Bound the provider call; expiry reports `SERVICE_UNAVAILABLE`
    pub fn with_timeout(mut self, timeout: impl Into<Option<Duration>>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// The injected provider
    pub fn provider(&self) -> &G {
        &self.provider
    }

    /// Resolve a request that is known to be present
    pub async fn resolve(&self, request: &GeocodeRequest) -> Rendered<Vec<AddressRecord>> {
        self.resolve_address(Some(request)).await
    }

    /// Resolve the addresses at the request's coordinates
    pub async fn resolve_address(
        &self,
        request: Option<&GeocodeRequest>,
    ) -> Rendered<Vec<AddressRecord>> {
        let (request, coords, limit) = match validate(request) {
            Ok(checked) => checked,
            Err(failure) => {
                debug!("Geocode request rejected: {}", failure.status());
                return self.fail(failure);
            }
        };

        match self.delegate(request, coords, limit).await {
            Ok(records) => {
                let text = self.render_addresses(&records);
                Rendered::success(records, text)
            }
            Err(failure) => self.fail(failure),
        }
    }

    /// Single provider call, mapped onto the taxonomy
    async fn delegate(
        &self,
        request: &GeocodeRequest,
        coords: Coordinates,
        limit: usize,
    ) -> Result<Vec<AddressRecord>, Failure> {
        debug!(
            "Reverse geocoding ({}, {}) limit={} locale={} via {}",
            coords.lat,
            coords.lng,
            limit,
            request.locale(),
            self.provider.name()
        );

        // A panicking provider is a provider failure like any other
        let lookup = AssertUnwindSafe(self.provider.lookup(
            coords.lat,
            coords.lng,
            limit,
            request.locale(),
        ))
        .catch_unwind()
        .map(|caught| {
            caught.unwrap_or_else(|_| Err(Error::Geocoding("provider panicked".to_string())))
        });

        let outcome = match self.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(
                        "{} did not answer within {:?}",
                        self.provider.name(),
                        deadline
                    );
                    return Err(Failure::ServiceUnavailable);
                }
            },
            None => lookup.await,
        };

        match outcome {
            Ok(Some(records)) if !records.is_empty() => Ok(records),
            Ok(_) => Err(Failure::NoResults),
            Err(Error::InvalidCoordinates(reason)) => {
                warn!("{} rejected coordinates: {}", self.provider.name(), reason);
                Err(Failure::CoordinateOutOfRange)
            }
            Err(e) => {
                warn!("{} failed: {}", self.provider.name(), e);
                Err(Failure::ServiceUnavailable)
            }
        }
    }

    /// Newline-terminated listing, with index headings when there are several
    fn render_addresses(&self, records: &[AddressRecord]) -> String {
        let numbered = records.len() > 1;
        let mut output = String::new();

        for (i, record) in records.iter().enumerate() {
            if numbered {
                output.push_str(&self.messages.address_heading(i + 1));
                output.push_str(LINE_TERMINATOR);
            }
            for line in record.lines() {
                output.push_str(line);
                output.push_str(LINE_TERMINATOR);
            }
        }

        output
    }

    fn fail<T>(&self, failure: Failure) -> Rendered<T> {
        Rendered::failure(failure, self.messages.message(failure.status()))
    }
}

/// Validation in contract order; the first failing check wins
fn validate(
    request: Option<&GeocodeRequest>,
) -> Result<(&GeocodeRequest, Coordinates, usize), Failure> {
    let request = request.ok_or(Failure::InvalidRequest)?;
    let raw = request.coordinates().ok_or(Failure::LocationMissing)?;

    let coords = raw.resolve().map_err(|(_, check)| match check {
        Validation::Unparseable => Failure::CoordinateUnparseable,
        _ => Failure::CoordinateOutOfRange,
    })?;

    let limit = usize::try_from(request.limit())
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(Failure::LimitInvalid)?;

    Ok((request, coords, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::RawCoordinates;
    use crate::geo::Locale;
    use crate::outcome::Status;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Reply {
        Records(Vec<AddressRecord>),
        Nothing,
        Rejected,
        Offline,
        Broken,
        Panic,
        Hang,
    }

    struct FakeGeocoder {
        reply: Reply,
        calls: AtomicUsize,
        seen: Mutex<Option<(f64, f64, usize, Locale)>>,
    }

    impl FakeGeocoder {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ReverseGeocoder for FakeGeocoder {
        fn name(&self) -> &str {
            "fake"
        }

        async fn lookup(
            &self,
            lat: f64,
            lng: f64,
            limit: usize,
            locale: &Locale,
        ) -> crate::error::Result<Option<Vec<AddressRecord>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen.lock().unwrap() = Some((lat, lng, limit, locale.clone()));
            match &self.reply {
                Reply::Records(records) => Ok(Some(records.clone())),
                Reply::Nothing => Ok(None),
                Reply::Rejected => Err(Error::InvalidCoordinates("rejected".to_string())),
                Reply::Offline => Err(Error::ServiceUnavailable("offline".to_string())),
                Reply::Broken => Err(Error::Geocoding("bad payload".to_string())),
                Reply::Panic => {
                    let parts: Vec<AddressRecord> = Vec::new();
                    Ok(Some(vec![parts[3].clone()]))
                }
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(None)
                }
            }
        }
    }

    fn baker_street() -> AddressRecord {
        AddressRecord::new("221B Baker St", "London", "NW1", "UK")
    }

    fn request(
        lat: impl Into<crate::coord::RawDegrees>,
        lng: impl Into<crate::coord::RawDegrees>,
    ) -> GeocodeRequest {
        GeocodeRequest::at(RawCoordinates::new(lat, lng))
    }

    #[tokio::test]
    async fn test_single_record_has_no_heading() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![baker_street()])));
        let rendered = facade.resolve(&request(51.5238, -0.1586)).await;

        assert_eq!(rendered.status(), Status::Ok);
        assert_eq!(rendered.text(), "221B Baker St\nLondon\nNW1\nUK\n");
        assert_eq!(rendered.payload().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_multiple_records_get_index_headings() {
        let second = AddressRecord::new("10 Downing St", "London", "SW1A 2AA", "UK");
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![
            baker_street(),
            second,
        ])));
        let rendered = facade.resolve(&request(51.5, -0.12).with_limit(2)).await;

        assert_eq!(rendered.status(), Status::Ok);
        assert_eq!(
            rendered.text(),
            "Address 1\n221B Baker St\nLondon\nNW1\nUK\n\
             Address 2\n10 Downing St\nLondon\nSW1A 2AA\nUK\n"
        );
    }

    #[tokio::test]
    async fn test_missing_fields_render_as_empty_lines() {
        let sparse = AddressRecord {
            address_line: None,
            locality: Some("Reykjavik".to_string()),
            postal_code: None,
            country_name: Some("Iceland".to_string()),
        };
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![sparse])));
        let rendered = facade.resolve(&request(64.1466, -21.9426)).await;

        assert_eq!(rendered.text(), "\nReykjavik\n\nIceland\n");
        assert!(!rendered.text().contains("null"));
    }

    #[tokio::test]
    async fn test_provider_receives_validated_arguments() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![baker_street()])));
        let req = request("51.5238", " -0.1586 ")
            .with_limit(3)
            .with_locale(Locale::new("en-GB"));
        facade.resolve(&req).await;

        let seen = facade.provider().seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen, (51.5238, -0.1586, 3, Locale::new("en-GB")));
    }

    #[tokio::test]
    async fn test_absent_request() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve_address(None).await;

        assert_eq!(rendered.status(), Status::InvalidRequest);
        assert_eq!(facade.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_absent_coordinates() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve(&GeocodeRequest::new(None)).await;

        assert_eq!(rendered.status(), Status::LocationMissing);
        assert_eq!(rendered.text(), "Location is null");
        assert_eq!(facade.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_latitude_out_of_range_with_valid_longitude() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve(&request(91.0, 10.0)).await;

        assert_eq!(rendered.status(), Status::CoordinateOutOfRange);
        assert!(rendered.payload().is_none());
        assert_eq!(facade.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_longitude_out_of_range() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve(&request(10.0, -180.5)).await;
        assert_eq!(rendered.status(), Status::CoordinateOutOfRange);
    }

    #[tokio::test]
    async fn test_unparseable_coordinates() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));

        let rendered = facade.resolve(&request("fifty", 10.0)).await;
        assert_eq!(rendered.status(), Status::CoordinateUnparseable);

        let rendered = facade.resolve(&request(10.0, "east")).await;
        assert_eq!(rendered.status(), Status::CoordinateUnparseable);
        assert_eq!(facade.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_coordinate_checks_precede_limit_check() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve(&request(95.0, 0.0).with_limit(0)).await;
        assert_eq!(rendered.status(), Status::CoordinateOutOfRange);
    }

    #[tokio::test]
    async fn test_limit_zero_or_negative() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![baker_street()])));

        for limit in [0, -1, i64::MIN] {
            let rendered = facade.resolve(&request(51.5, -0.1).with_limit(limit)).await;
            assert_eq!(rendered.status(), Status::LimitInvalid, "limit {}", limit);
            assert_eq!(rendered.text(), "Limit is not valid");
        }
        assert_eq!(facade.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_no_results() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Nothing));
        let rendered = facade.resolve(&request(0.0, 0.0)).await;
        assert_eq!(rendered.status(), Status::NoResults);
        assert_eq!(facade.provider().calls(), 1);

        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(Vec::new())));
        let rendered = facade.resolve(&request(0.0, 0.0)).await;
        assert_eq!(rendered.status(), Status::NoResults);
    }

    #[tokio::test]
    async fn test_provider_rejection_maps_to_out_of_range() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Rejected));
        let rendered = facade.resolve(&request(0.0, 0.0)).await;
        assert_eq!(rendered.status(), Status::CoordinateOutOfRange);
    }

    #[tokio::test]
    async fn test_provider_failures_map_to_service_unavailable() {
        for reply in [Reply::Offline, Reply::Broken] {
            let facade = GeocodingFacade::new(FakeGeocoder::new(reply));
            let rendered = facade.resolve(&request(0.0, 0.0)).await;
            assert_eq!(rendered.status(), Status::ServiceUnavailable);
            assert_eq!(rendered.text(), "Service is not available");
            assert_eq!(facade.provider().calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_panicking_provider_maps_to_service_unavailable() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Panic));
        let rendered = facade.resolve(&request(51.5238, -0.1586)).await;
        assert_eq!(rendered.status(), Status::ServiceUnavailable);
        assert_eq!(rendered.text(), "Service is not available");
        assert!(rendered.payload().is_none());

        let facade = facade.with_timeout(Duration::from_secs(5));
        let rendered = facade.resolve(&request(51.5238, -0.1586)).await;
        assert_eq!(rendered.status(), Status::ServiceUnavailable);
    }

    #[tokio::test]
    async fn test_panicking_provider_does_not_abort_spawned_task() {
        let facade = Arc::new(GeocodingFacade::new(FakeGeocoder::new(Reply::Panic)));
        let task = tokio::spawn({
            let facade = Arc::clone(&facade);
            async move { facade.resolve(&request(0.0, 0.0)).await.status() }
        });

        assert_eq!(task.await.unwrap(), Status::ServiceUnavailable);
        assert_eq!(facade.provider().calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_maps_to_service_unavailable() {
        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Hang))
            .with_timeout(Duration::from_secs(5));
        let rendered = facade.resolve(&request(0.0, 0.0)).await;
        assert_eq!(rendered.status(), Status::ServiceUnavailable);
    }

    #[tokio::test]
    async fn test_custom_messages() {
        struct Terse;
        impl MessageCatalog for Terse {
            fn message(&self, status: Status) -> String {
                format!("E:{}", status)
            }
            fn address_heading(&self, index: usize) -> String {
                format!("#{}", index)
            }
        }

        let facade = GeocodingFacade::new(FakeGeocoder::new(Reply::Records(vec![
            baker_street(),
            baker_street(),
        ])))
        .with_messages(Arc::new(Terse));

        let rendered = facade.resolve(&request(0.0, 0.0).with_limit(0)).await;
        assert_eq!(rendered.text(), "E:LIMIT_INVALID");

        let rendered = facade.resolve(&request(0.0, 0.0).with_limit(2)).await;
        assert!(rendered.text().starts_with("#1\n221B Baker St\n"));
        assert!(rendered.text().contains("\n#2\n"));
    }
}
