//! Error handling and service statistics.
//!
//! This module provides:
//! - Domain error types (validation, metadata, polling, initialization)
//! - Event kinds and the counters that track them

mod stats;
mod types;

pub use stats::ServiceStats;
pub use types::{
    EventType, GeocodeError, InitializationError, MetadataError, PollError, ValidationError,
};
