//! geowoot library: latest-location store and country metadata proxy
//!
//! A browser userscript posts the coordinates it sniffs from Google Maps
//! traffic to `POST /api/location`. The service keeps only the latest reading
//! and proxies country metadata pages from a third-party site. A poller
//! follows the reading, reverse geocodes it, and fetches the metadata for
//! the resolved country.
//!
//! # Example
//!
//! ```no_run
//! use geowoot::{run_server, ServerConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig {
//!     listen_addr: "127.0.0.1:3000".to_string(),
//!     ..Default::default()
//! };
//!
//! run_server(config, CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod location;
pub mod metadata;
pub mod poller;
pub mod script;
pub mod server;

// Re-export public API
pub use config::{LogFormat, LogLevel, PollerConfig, ServerConfig};
pub use location::{Coordinates, InMemoryLocationStore, LocationStore, Reading};
pub use metadata::{HtmlFragment, MetadataClient};
pub use poller::{run_poller, Phase, Place, Poller, View};
pub use script::render_userscript;
pub use server::{router, run_server, AppState};
