//! Configuration constants.
//!
//! Defaults, fixed upstream paths, and the literal fragments the metadata
//! proxy returns in place of errors.

use std::time::Duration;

/// Default address the HTTP server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default public base URL, substituted into the userscript.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default metadata site. Pages live under `/metas/countries/<name>/`.
pub const DEFAULT_METADATA_URL: &str = "https://geometas.com";

/// Default reverse geocoding service (Nominatim-compatible).
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// User-Agent sent to the metadata site and the geocoder.
pub const USER_AGENT: &str = "MapViewerApp/1.0";

/// Path segments preceding the normalized country name on the metadata site.
pub const METADATA_PATH_PREFIX: &[&str] = &["metas", "countries"];

/// Returned with a success status when the metadata site has no page.
pub const NO_METADATA_FRAGMENT: &str = "<p>No metadata available for this country.</p>";

/// Returned with a success status whenever the metadata fetch fails.
pub const UNAVAILABLE_METADATA_FRAGMENT: &str =
    r#"<p class="text-muted-foreground">Unable to load metadata for this country.</p>"#;

// Poller
/// Interval between polls of the location endpoint.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Minimum change in degrees (either axis) that triggers a new reverse geocode.
pub const COORDINATE_CHANGE_THRESHOLD: f64 = 0.09;
/// Zoom level requested from the reverse geocoder (city granularity).
pub const GEOCODER_ZOOM: u8 = 12;
/// Placeholder used when a city or country cannot be resolved.
pub const UNKNOWN_PLACE: &str = "Unknown";

// Coordinate bounds
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
