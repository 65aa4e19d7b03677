//! Reverse geocoding against a Nominatim-compatible service.

use serde::Deserialize;
use url::Url;

use crate::config::{GEOCODER_ZOOM, UNKNOWN_PLACE};
use crate::error_handling::{GeocodeError, InitializationError};
use crate::initialization::{endpoint_url, parse_base_url};

/// Human-readable place for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub city: String,
    pub country: String,
}

impl Place {
    pub fn unknown() -> Self {
        Self {
            city: UNKNOWN_PLACE.to_string(),
            country: UNKNOWN_PLACE.to_string(),
        }
    }

    fn from_address(address: Option<Address>) -> Self {
        let Some(address) = address else {
            return Self::unknown();
        };
        let city = [address.city, address.town, address.village, address.county]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        let country = address
            .country
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        Self { city, country }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    country: Option<String>,
}

/// Client for `GET /reverse?format=json&lat=..&lon=..&zoom=12`.
#[derive(Clone)]
pub struct ReverseGeocoder {
    http: reqwest::Client,
    reverse_url: Url,
}

impl ReverseGeocoder {
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, InitializationError> {
        let base = parse_base_url(base_url)?;
        Ok(Self {
            http,
            reverse_url: endpoint_url(&base, ["reverse"]),
        })
    }

    /// Resolves a coordinate to a place. A response without an address is an
    /// unknown place, not an error.
    pub async fn reverse(&self, lat: f64, lng: f64) -> Result<Place, GeocodeError> {
        let mut url = self.reverse_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lng.to_string())
            .append_pair("zoom", &GEOCODER_ZOOM.to_string());

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let body: ReverseResponse = response.json().await?;
        Ok(Place::from_address(body.address))
    }
}
