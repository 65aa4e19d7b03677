//! `/api/location` handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};
use serde_json::json;

use super::super::types::{AppState, ErrorBody, LocationUpdated};
use crate::config::LOCATION_CORS_HEADERS;
use crate::error_handling::EventType;
use crate::location::Coordinates;

/// Replaces the current reading with the posted `{lat, lng}`.
///
/// The body is read raw so malformed JSON gets the same `{error}` shape as
/// the other validation failures.
pub async fn post_location(State(state): State<AppState>, body: Bytes) -> Response {
    let result = Coordinates::from_json(&body)
        .and_then(|coords| state.store.update(coords.lat(), coords.lng()));

    match result {
        Ok(reading) => {
            state.stats.record(EventType::LocationUpdated);
            info!(
                "Location updated: {}, {} at {}",
                reading.lat,
                reading.lng,
                reading.timestamp.to_rfc3339()
            );
            let body = LocationUpdated {
                success: true,
                location: reading,
            };
            (LOCATION_CORS_HEADERS, Json(body)).into_response()
        }
        Err(e) => {
            state.stats.record(EventType::LocationRejected);
            warn!("Rejected location update: {e}");
            let body = ErrorBody {
                error: e.to_string(),
            };
            (StatusCode::BAD_REQUEST, LOCATION_CORS_HEADERS, Json(body)).into_response()
        }
    }
}

/// Current reading, or `null` before the first update.
pub async fn get_location(State(state): State<AppState>) -> Response {
    (LOCATION_CORS_HEADERS, Json(state.store.read())).into_response()
}

/// CORS preflight.
pub async fn location_options() -> Response {
    (LOCATION_CORS_HEADERS, Json(json!({}))).into_response()
}
