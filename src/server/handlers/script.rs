//! Userscript download.

use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};

use super::super::types::AppState;
use crate::config::CONTENT_TYPE_JAVASCRIPT;

pub async fn userscript_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, CONTENT_TYPE_JAVASCRIPT)],
        state.userscript.to_string(),
    )
}
