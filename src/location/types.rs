//! Coordinate and reading types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::config::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error_handling::ValidationError;

/// A validated latitude/longitude pair in degrees.
///
/// Construction goes through [`Coordinates::new`], so both fields are always
/// finite and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Validates a coordinate pair.
    ///
    /// Latitude is checked before longitude, so a pair that is wrong on both
    /// axes reports the latitude error. Infinities are numbers and fail the
    /// range check; only NaN is rejected as not a number.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if lat.is_nan() || lng.is_nan() {
            return Err(ValidationError::NotANumber);
        }
        if !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange);
        }
        if !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&lng) {
            return Err(ValidationError::LongitudeOutOfRange);
        }
        Ok(Self { lat, lng })
    }

    /// Parses the `POST /api/location` body.
    ///
    /// The body must be a JSON value whose `lat` and `lng` members are JSON
    /// numbers. Numeric strings are rejected. Other members are ignored.
    /// Members are read as raw JSON text, so a literal too large for `f64`
    /// becomes an infinity and is reported as out of range.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let raw: &RawValue =
            serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
        if raw.get().trim() == "null" {
            return Err(ValidationError::InvalidJson);
        }

        // Anything but an object has no members
        let members: HashMap<String, &RawValue> =
            serde_json::from_str(raw.get()).unwrap_or_default();
        let lat = members.get("lat").and_then(|v| json_number(v));
        let lng = members.get("lng").and_then(|v| json_number(v));
        match (lat, lng) {
            (Some(lat), Some(lng)) => Self::new(lat, lng),
            _ => Err(ValidationError::NotANumber),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Value of a raw JSON member if it is a number literal.
fn json_number(value: &RawValue) -> Option<f64> {
    let text = value.get();
    if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// The last known position: a coordinate pair and when it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub lat: f64,
    pub lng: f64,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// Stamps validated coordinates with the current time.
    pub fn now(coords: Coordinates) -> Self {
        Self {
            lat: coords.lat,
            lng: coords.lng,
            timestamp: Utc::now(),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T12:00:00.123Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_accepts_bounds() {
        for (lat, lng) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0), (48.8566, 2.3522)] {
            let coords = Coordinates::new(lat, lng).unwrap();
            assert_eq!(coords.lat(), lat);
            assert_eq!(coords.lng(), lng);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Coordinates::new(95.0, 0.0),
            Err(ValidationError::LatitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::new(0.0, -200.0),
            Err(ValidationError::LongitudeOutOfRange)
        );
        // latitude wins when both are wrong
        assert_eq!(
            Coordinates::new(-91.0, 181.0),
            Err(ValidationError::LatitudeOutOfRange)
        );
    }

    #[test]
    fn test_new_rejects_nan_and_infinity() {
        assert_eq!(
            Coordinates::new(f64::NAN, 0.0),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            Coordinates::new(0.0, f64::INFINITY),
            Err(ValidationError::LongitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::new(f64::NEG_INFINITY, 0.0),
            Err(ValidationError::LatitudeOutOfRange)
        );
    }

    #[test]
    fn test_from_json_overflowing_literal_is_out_of_range() {
        assert_eq!(
            Coordinates::from_json(br#"{"lat": 1e400, "lng": 0}"#),
            Err(ValidationError::LatitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::from_json(br#"{"lat": 0, "lng": -1e400}"#),
            Err(ValidationError::LongitudeOutOfRange)
        );
    }

    #[test]
    fn test_from_json_rejects_non_number_literals() {
        for body in [
            &br#"{"lat": true, "lng": 0}"#[..],
            br#"{"lat": null, "lng": 0}"#,
            br#"{"lat": [1], "lng": 0}"#,
            br#"{"lat": {"v": 1}, "lng": 0}"#,
        ] {
            assert_eq!(
                Coordinates::from_json(body),
                Err(ValidationError::NotANumber)
            );
        }
    }

    #[test]
    fn test_from_json_valid() {
        let coords = Coordinates::from_json(br#"{"lat": 51.5, "lng": -0.12, "extra": true}"#)
            .unwrap();
        assert_eq!(coords.lat(), 51.5);
        assert_eq!(coords.lng(), -0.12);
    }

    #[test]
    fn test_from_json_integers_are_numbers() {
        let coords = Coordinates::from_json(br#"{"lat": 10, "lng": -20}"#).unwrap();
        assert_eq!(coords.lat(), 10.0);
        assert_eq!(coords.lng(), -20.0);
    }

    #[test]
    fn test_from_json_rejects_strings_and_missing_fields() {
        assert_eq!(
            Coordinates::from_json(br#"{"lat": "10", "lng": 20}"#),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            Coordinates::from_json(br#"{"lat": 10}"#),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            Coordinates::from_json(b"[1, 2]"),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_and_null() {
        assert_eq!(
            Coordinates::from_json(b"{not json"),
            Err(ValidationError::InvalidJson)
        );
        assert_eq!(
            Coordinates::from_json(b""),
            Err(ValidationError::InvalidJson)
        );
        assert_eq!(
            Coordinates::from_json(b"null"),
            Err(ValidationError::InvalidJson)
        );
    }

    #[test]
    fn test_reading_timestamp_format() {
        let reading = Reading {
            lat: 1.5,
            lng: -2.25,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["lng"], -2.25);
    }

    #[test]
    fn test_reading_parses_own_output() {
        let raw = r#"{"lat":10.0,"lng":20.0,"timestamp":"2024-05-01T12:00:00.123Z"}"#;
        let reading: Reading = serde_json::from_str(raw).unwrap();
        assert_eq!(reading.timestamp.timestamp_subsec_millis(), 123);
        assert_eq!(serde_json::to_string(&reading).unwrap(), raw);
    }
}
