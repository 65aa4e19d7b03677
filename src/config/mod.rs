//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, upstream paths, fallback fragments)
//! - CORS header sets
//! - Server and poller configuration types
//! - The command-line interface that maps onto them

mod cli;
mod constants;
mod headers;
mod types;

pub use cli::{Cli, Command, ScriptArgs, ServeArgs, WatchArgs};
pub use constants::*;
pub use headers::*;
pub use types::{LogFormat, LogLevel, PollerConfig, ServerConfig};
