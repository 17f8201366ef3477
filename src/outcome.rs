//! Outcome taxonomy shared by both facades
//!
//! Every facade call produces exactly one [`Status`]. A [`Rendered`] pairs that
//! status with the payload (present only for `OK`) and a printable message.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Closed set of result codes a facade call can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    InvalidRequest,
    LocationMissing,
    CoordinateOutOfRange,
    CoordinateUnparseable,
    LimitInvalid,
    ServiceUnavailable,
    NoResults,
    ParamsMissing,
    ProviderMissing,
    ProviderInvalid,
    LocationNotFound,
}

impl Status {
    /// Every status, in declaration order
    pub fn all() -> [Status; 12] {
        [
            Self::Ok,
            Self::InvalidRequest,
            Self::LocationMissing,
            Self::CoordinateOutOfRange,
            Self::CoordinateUnparseable,
            Self::LimitInvalid,
            Self::ServiceUnavailable,
            Self::NoResults,
            Self::ParamsMissing,
            Self::ProviderMissing,
            Self::ProviderInvalid,
            Self::LocationNotFound,
        ]
    }

    /// Stable upper-case identifier (also used as the config key for messages)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::LocationMissing => "LOCATION_MISSING",
            Self::CoordinateOutOfRange => "COORDINATE_OUT_OF_RANGE",
            Self::CoordinateUnparseable => "COORDINATE_UNPARSEABLE",
            Self::LimitInvalid => "LIMIT_INVALID",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::NoResults => "NO_RESULTS",
            Self::ParamsMissing => "PARAMS_MISSING",
            Self::ProviderMissing => "PROVIDER_MISSING",
            Self::ProviderInvalid => "PROVIDER_INVALID",
            Self::LocationNotFound => "LOCATION_NOT_FOUND",
        }
    }

    /// Built-in English description
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidRequest => "Request is missing",
            Self::LocationMissing => "Location is null",
            Self::CoordinateOutOfRange => "Location is out of range",
            Self::CoordinateUnparseable => "Location cannot be parsed",
            Self::LimitInvalid => "Limit is not valid",
            Self::ServiceUnavailable => "Service is not available",
            Self::NoResults => "No addresses found",
            Self::ParamsMissing => "Locator params are null",
            Self::ProviderMissing => "Provider is missing",
            Self::ProviderInvalid => "Provider is not valid",
            Self::LocationNotFound => "No location found",
        }
    }

    /// True only for `OK`
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Legitimate empty outcomes: the lookup ran but had nothing to return
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoResults | Self::LocationNotFound)
    }

    /// Validation or service failures
    pub fn is_error(&self) -> bool {
        !self.is_success() && !self.is_empty_result()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

/// Every non-OK status, as an error value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    #[error("{}", Status::InvalidRequest.default_message())]
    InvalidRequest,
    #[error("{}", Status::LocationMissing.default_message())]
    LocationMissing,
    #[error("{}", Status::CoordinateOutOfRange.default_message())]
    CoordinateOutOfRange,
    #[error("{}", Status::CoordinateUnparseable.default_message())]
    CoordinateUnparseable,
    #[error("{}", Status::LimitInvalid.default_message())]
    LimitInvalid,
    #[error("{}", Status::ServiceUnavailable.default_message())]
    ServiceUnavailable,
    #[error("{}", Status::NoResults.default_message())]
    NoResults,
    #[error("{}", Status::ParamsMissing.default_message())]
    ParamsMissing,
    #[error("{}", Status::ProviderMissing.default_message())]
    ProviderMissing,
    #[error("{}", Status::ProviderInvalid.default_message())]
    ProviderInvalid,
    #[error("{}", Status::LocationNotFound.default_message())]
    LocationNotFound,
}

impl Failure {
    /// The status this failure reports
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidRequest => Status::InvalidRequest,
            Self::LocationMissing => Status::LocationMissing,
            Self::CoordinateOutOfRange => Status::CoordinateOutOfRange,
            Self::CoordinateUnparseable => Status::CoordinateUnparseable,
            Self::LimitInvalid => Status::LimitInvalid,
            Self::ServiceUnavailable => Status::ServiceUnavailable,
            Self::NoResults => Status::NoResults,
            Self::ParamsMissing => Status::ParamsMissing,
            Self::ProviderMissing => Status::ProviderMissing,
            Self::ProviderInvalid => Status::ProviderInvalid,
            Self::LocationNotFound => Status::LocationNotFound,
        }
    }
}

/// A facade result ready for presentation
///
/// Holds the payload only when the status is `OK`; the rendered text is
/// always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<T> {
    result: Result<T, Failure>,
    text: String,
}

impl<T> Rendered<T> {
    /// Successful outcome
    pub fn success(payload: T, text: impl Into<String>) -> Self {
        Self {
            result: Ok(payload),
            text: text.into(),
        }
    }

    /// Failed or empty outcome
    pub fn failure(failure: Failure, text: impl Into<String>) -> Self {
        Self {
            result: Err(failure),
            text: text.into(),
        }
    }

    /// Status of this outcome
    pub fn status(&self) -> Status {
        match &self.result {
            Ok(_) => Status::Ok,
            Err(failure) => failure.status(),
        }
    }

    /// Payload, present only for `OK`
    pub fn payload(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Failure, absent for `OK`
    pub fn failure_kind(&self) -> Option<Failure> {
        self.result.as_ref().err().copied()
    }

    /// Rendered text (address listing, coordinate string, or message)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the status is `OK`
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Consume into the underlying result
    pub fn into_result(self) -> Result<T, Failure> {
        self.result
    }

    /// Split into the underlying result and text
    pub fn into_parts(self) -> (Result<T, Failure>, String) {
        (self.result, self.text)
    }
}

impl<T: Serialize> Serialize for Rendered<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Rendered", 3)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("payload", &self.payload())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_success_carries_payload() {
        let rendered = Rendered::success(42, "forty-two");
        assert_eq!(rendered.status(), Status::Ok);
        assert_eq!(rendered.payload(), Some(&42));
        assert!(rendered.failure_kind().is_none());
        assert_eq!(rendered.text(), "forty-two");
    }

    #[test]
    fn test_failure_has_no_payload() {
        let rendered: Rendered<i32> = Rendered::failure(Failure::LimitInvalid, "bad limit");
        assert_eq!(rendered.status(), Status::LimitInvalid);
        assert!(rendered.payload().is_none());
        assert!(!rendered.is_ok());
    }

    #[test]
    fn test_every_failure_maps_to_distinct_non_ok_status() {
        let failures = [
            Failure::InvalidRequest,
            Failure::LocationMissing,
            Failure::CoordinateOutOfRange,
            Failure::CoordinateUnparseable,
            Failure::LimitInvalid,
            Failure::ServiceUnavailable,
            Failure::NoResults,
            Failure::ParamsMissing,
            Failure::ProviderMissing,
            Failure::ProviderInvalid,
            Failure::LocationNotFound,
        ];
        let mut seen: Vec<Status> = failures.iter().map(Failure::status).collect();
        assert!(!seen.contains(&Status::Ok));
        seen.sort_by_key(|s| s.as_str());
        seen.dedup();
        assert_eq!(seen.len(), failures.len());
    }

    #[test]
    fn test_status_classification() {
        assert!(Status::Ok.is_success());
        assert!(Status::LocationNotFound.is_empty_result());
        assert!(!Status::LocationNotFound.is_error());
        assert!(Status::NoResults.is_empty_result());
        assert!(Status::ProviderInvalid.is_error());
        assert!(Status::ServiceUnavailable.is_error());
    }

    #[test]
    fn test_status_from_str_round_trips_identifiers() {
        for status in Status::all() {
            assert_eq!(Status::from_str(status.as_str()).unwrap(), status);
        }
        assert_eq!(Status::from_str("no-results").unwrap(), Status::NoResults);
        assert!(Status::from_str("bogus").is_err());
    }

    #[test]
    fn test_failure_display_uses_default_message() {
        assert_eq!(Failure::NoResults.to_string(), "No addresses found");
        assert_eq!(Failure::ProviderInvalid.to_string(), "Provider is not valid");
    }

    #[test]
    fn test_rendered_serialization() {
        let rendered: Rendered<String> = Rendered::failure(Failure::NoResults, "nothing");
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["status"], "NO_RESULTS");
        assert_eq!(json["text"], "nothing");
        assert!(json["payload"].is_null());
    }
}
