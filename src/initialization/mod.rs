//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Outbound HTTP clients
//! - Base URL parsing and endpoint construction

mod client;
mod logger;

pub use client::{endpoint_url, init_metadata_client, init_poller_client, parse_base_url};
pub use logger::init_logger_with;
