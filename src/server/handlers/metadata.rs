//! `/api/country-metadata` handlers.

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::warn;

use super::super::types::{AppState, ErrorBody, MetadataQuery};
use crate::config::{CONTENT_TYPE_HTML, METADATA_CORS_HEADERS};
use crate::error_handling::{EventType, ValidationError};

/// Metadata fragment for `?country=<name>`.
///
/// Always 200 with HTML once a country is given; upstream failures arrive
/// here already replaced by the fallback fragment. A repeated `country`
/// uses the first value.
pub async fn get_country_metadata(
    State(state): State<AppState>,
    Query(query): Query<MetadataQuery>,
) -> Response {
    let country = match query.country() {
        Some(country) if !country.is_empty() => country,
        _ => {
            state.stats.record(EventType::MetadataRejected);
            warn!("Country metadata request without a country");
            let body = ErrorBody {
                error: ValidationError::MissingCountry.to_string(),
            };
            return (StatusCode::BAD_REQUEST, METADATA_CORS_HEADERS, Json(body)).into_response();
        }
    };

    let fragment = state.metadata.fetch_or_fallback(country, &state.stats).await;

    (
        StatusCode::OK,
        [(CONTENT_TYPE, CONTENT_TYPE_HTML)],
        METADATA_CORS_HEADERS,
        fragment.into_string(),
    )
        .into_response()
}

/// CORS preflight.
pub async fn metadata_options() -> Response {
    (StatusCode::OK, METADATA_CORS_HEADERS).into_response()
}
