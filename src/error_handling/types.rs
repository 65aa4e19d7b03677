//! Error type definitions.
//!
//! Domain errors surfaced by the location store, the metadata proxy, and the
//! poller, plus the event kinds counted by [`super::ServiceStats`].

use log::SetLoggerError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// A configured base URL did not parse.
    #[error("Invalid URL '{url}': {source}")]
    UrlError {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Rejected caller input. Rendered as HTTP 400 with the message as `error`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not JSON, or is JSON `null`.
    #[error("Invalid JSON body")]
    InvalidJson,

    /// `lat` or `lng` is missing, not a JSON number, or not finite.
    #[error("Invalid coordinates. Both lat and lng must be numbers.")]
    NotANumber,

    #[error("Latitude must be between -90 and 90.")]
    LatitudeOutOfRange,

    #[error("Longitude must be between -180 and 180.")]
    LongitudeOutOfRange,

    /// `country` query parameter missing or empty.
    #[error("Country parameter required")]
    MissingCountry,
}

/// Failure fetching a metadata page.
///
/// Never reaches the HTTP caller: the proxy replaces it with the fallback
/// fragment. The variant still decides how the failure is logged and counted.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Upstream answered with a status other than 200 or 404.
    #[error("metadata site returned HTTP {0}")]
    Upstream(StatusCode),

    /// DNS, connect, timeout, or body read failure.
    #[error("metadata request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MetadataError {
    /// Event kind recorded for this failure.
    pub fn event_type(&self) -> EventType {
        match self {
            MetadataError::Upstream(_) => EventType::MetadataUpstreamError,
            MetadataError::Transport(_) => EventType::MetadataTransportError,
        }
    }
}

/// Failure talking to the geowoot service from the poller.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("request to geowoot service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geowoot service returned HTTP {0}")]
    Status(StatusCode),
}

/// Failure resolving a coordinate to a place. The poller maps it to an
/// unknown place.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("reverse geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("reverse geocoder returned HTTP {0}")]
    Status(StatusCode),
}

/// Events counted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum EventType {
    LocationUpdated,
    LocationRejected,
    MetadataServed,
    MetadataNotFound,
    MetadataRejected,
    MetadataUpstreamError,
    MetadataTransportError,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::LocationUpdated => "location updated",
            EventType::LocationRejected => "location rejected",
            EventType::MetadataServed => "metadata served",
            EventType::MetadataNotFound => "metadata not found",
            EventType::MetadataRejected => "metadata request rejected",
            EventType::MetadataUpstreamError => "metadata upstream error",
            EventType::MetadataTransportError => "metadata transport error",
        }
    }

    /// True for metadata failures that were replaced by the fallback fragment.
    pub fn is_swallowed(&self) -> bool {
        matches!(
            self,
            EventType::MetadataUpstreamError | EventType::MetadataTransportError
        )
    }
}
