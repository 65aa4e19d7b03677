//! JSON status handler.

use axum::{extract::State, Json};

use super::super::types::{AppState, LocationCounts, MetadataCounts, StatusResponse};
use crate::error_handling::EventType;

/// Uptime, whether a reading exists, and event counts
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let stats = &state.stats;

    Json(StatusResponse {
        uptime_seconds: stats.uptime_seconds(),
        has_location: state.store.read().is_some(),
        location: LocationCounts {
            updated: stats.count(EventType::LocationUpdated),
            rejected: stats.count(EventType::LocationRejected),
        },
        metadata: MetadataCounts {
            served: stats.count(EventType::MetadataServed),
            not_found: stats.count(EventType::MetadataNotFound),
            rejected: stats.count(EventType::MetadataRejected),
            upstream_error: stats.count(EventType::MetadataUpstreamError),
            transport_error: stats.count(EventType::MetadataTransportError),
            fallbacks: stats.total_swallowed(),
        },
    })
}
