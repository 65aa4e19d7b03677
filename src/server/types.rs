//! Server state and response bodies.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error_handling::{InitializationError, ServiceStats};
use crate::initialization::init_metadata_client;
use crate::location::{InMemoryLocationStore, LocationStore, Reading};
use crate::metadata::MetadataClient;
use crate::script::render_userscript;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LocationStore>,
    pub metadata: MetadataClient,
    pub stats: Arc<ServiceStats>,
    /// Userscript rendered once with the configured base URL
    pub userscript: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn LocationStore>, metadata: MetadataClient, base_url: &str) -> Self {
        Self {
            store,
            metadata,
            stats: Arc::new(ServiceStats::new()),
            userscript: Arc::from(render_userscript(base_url)),
        }
    }

    /// Builds state from configuration with an empty in-memory store.
    ///
    /// # Errors
    ///
    /// Fails if the metadata client cannot be built or its URL is invalid.
    pub fn from_config(config: &ServerConfig) -> Result<Self, InitializationError> {
        let http = init_metadata_client(config)?;
        let metadata = MetadataClient::new(http, &config.metadata_url)?;
        Ok(Self::new(
            Arc::new(InMemoryLocationStore::new()),
            metadata,
            &config.base_url,
        ))
    }
}

/// Body of a successful `POST /api/location`
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationUpdated {
    pub success: bool,
    pub location: Reading,
}

/// Body of every 400 response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Query string of `/api/country-metadata` as ordered pairs.
///
/// Deserializing into pairs accepts repeated keys, so the query never
/// rejects; a repeated `country` resolves to its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct MetadataQuery(Vec<(String, String)>);

impl MetadataQuery {
    /// First `country` value, possibly empty.
    pub fn country(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "country")
            .map(|(_, value)| value.as_str())
    }
}

/// JSON response for `/status` endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub has_location: bool,
    pub location: LocationCounts,
    pub metadata: MetadataCounts,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationCounts {
    pub updated: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataCounts {
    pub served: usize,
    pub not_found: usize,
    pub rejected: usize,
    pub upstream_error: usize,
    pub transport_error: usize,
    /// Responses that carried the "unable to load" fragment
    pub fallbacks: usize,
}
