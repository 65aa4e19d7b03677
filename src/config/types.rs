//! Configuration types.
//!
//! The structs here carry no CLI dependency and can be built
//! programmatically; `main.rs` maps command-line flags onto them.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_GEOCODER_URL, DEFAULT_LISTEN_ADDR, DEFAULT_METADATA_URL,
    DEFAULT_POLL_INTERVAL,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: human-readable, colored (default)
/// - `Json`: one JSON object per line
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Settings for the HTTP service.
///
/// # Examples
///
/// ```no_run
/// use geowoot::ServerConfig;
///
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:8080".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:3000`
    pub listen_addr: String,

    /// Public base URL of this service, written into the userscript
    pub base_url: String,

    /// Base URL of the country metadata site
    pub metadata_url: String,

    /// Validate the metadata site's TLS certificate
    pub strict_tls: bool,

    /// Overall timeout for upstream requests; `None` keeps the transport default
    pub upstream_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            strict_tls: false,
            upstream_timeout: None,
        }
    }
}

/// Settings for the headless poller.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Base URL of a running geowoot service
    pub server_url: String,

    /// Base URL of the reverse geocoding service
    pub geocoder_url: String,

    /// Delay between polls of `/api/location`
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.metadata_url, "https://geometas.com");
        // certificate validation is opt-in
        assert!(!config.strict_tls);
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn test_poller_config_default_interval() {
        let config = PollerConfig::default();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert!(config.geocoder_url.contains("nominatim"));
    }
}
