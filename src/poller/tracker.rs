//! Last-seen coordinate and country, so repeated polls stay idempotent.

use crate::config::{COORDINATE_CHANGE_THRESHOLD, UNKNOWN_PLACE};

/// Remembers what the poller last acted on.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    last_coordinates: Option<(f64, f64)>,
    last_country: Option<String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `(lat, lng)` and returns true when it warrants a new reverse
    /// geocode: the first reading, or a move of more than the threshold on
    /// either axis. Small moves are not recorded; the next comparison is
    /// against the last reading that triggered.
    pub fn observe_coordinates(&mut self, lat: f64, lng: f64) -> bool {
        let changed = match self.last_coordinates {
            None => true,
            Some((last_lat, last_lng)) => {
                (lat - last_lat).abs() > COORDINATE_CHANGE_THRESHOLD
                    || (lng - last_lng).abs() > COORDINATE_CHANGE_THRESHOLD
            }
        };
        if changed {
            self.last_coordinates = Some((lat, lng));
        }
        changed
    }

    /// Records `country` and returns true when its metadata should be
    /// fetched: it is known and differs from the last fetched country.
    pub fn observe_country(&mut self, country: &str) -> bool {
        if country == UNKNOWN_PLACE || self.last_country.as_deref() == Some(country) {
            return false;
        }
        self.last_country = Some(country.to_string());
        true
    }

    pub fn last_country(&self) -> Option<&str> {
        self.last_country.as_deref()
    }
}
