//! HTTP service.
//!
//! Endpoints:
//! - `/api/location` - `GET`/`POST`/`OPTIONS` the latest coordinate reading
//! - `/api/country-metadata` - `GET`/`OPTIONS` a country's metadata fragment
//! - `/script.user.js` - the userscript, pointed at this service
//! - `/status` - JSON counters

mod handlers;
mod types;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use handlers::{
    get_country_metadata, get_location, location_options, metadata_options, post_location,
    status_handler, userscript_handler,
};
pub use types::{
    AppState, ErrorBody, LocationCounts, LocationUpdated, MetadataCounts, StatusResponse,
};

/// Builds the router for all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/location",
            get(get_location)
                .post(post_location)
                .options(location_options),
        )
        .route(
            "/api/country-metadata",
            get(get_country_metadata).options(metadata_options),
        )
        .route("/script.user.js", get(userscript_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Serves `state` on an already bound listener until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Binds `config.listen_addr` and serves until `shutdown` is cancelled.
pub async fn run_server(config: ServerConfig, shutdown: CancellationToken) -> Result<(), anyhow::Error> {
    let state = AppState::from_config(&config).context("Failed to initialize server state")?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            anyhow::anyhow!("Failed to bind server to {}: {}", config.listen_addr, e)
        })?;

    log::info!("geowoot listening on http://{}/", config.listen_addr);
    log::info!("  - Location: {}/api/location", config.base_url.trim_end_matches('/'));
    log::info!(
        "  - Userscript: {}/script.user.js",
        config.base_url.trim_end_matches('/')
    );
    log::info!("  - Metadata site: {}", config.metadata_url);

    serve(listener, state, shutdown).await?;

    log::info!("Server stopped");
    Ok(())
}
