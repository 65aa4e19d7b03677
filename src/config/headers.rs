//! CORS header values.
//!
//! Every API response carries an allow-all origin. The allowed methods differ
//! per endpoint, so they are kept as separate header sets.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderName;

/// `Access-Control-Allow-Origin` value for all endpoints.
pub const CORS_ALLOW_ORIGIN: &str = "*";
/// `Access-Control-Allow-Headers` value for all endpoints.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Headers attached to every `/api/location` response.
pub const LOCATION_CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS),
];

/// Headers attached to `/api/country-metadata` responses.
pub const METADATA_CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS),
];

/// Content type of the metadata fragment.
pub const CONTENT_TYPE_HTML: &str = "text/html";
/// Content type of the served userscript.
pub const CONTENT_TYPE_JAVASCRIPT: &str = "text/javascript; charset=utf-8";
