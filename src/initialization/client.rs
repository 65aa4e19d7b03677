//! HTTP client initialization.
//!
//! This module provides functions to initialize the outbound HTTP clients used
//! by the metadata proxy and the poller.

use std::time::Duration;

use reqwest::ClientBuilder;
use url::Url;

use crate::config::{ServerConfig, USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for the metadata site.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent `MapViewerApp/1.0`
/// - No redirect following: a 3xx is classified like any other non-200
/// - Certificate validation disabled unless `strict_tls` is set
/// - The optional upstream timeout (no timeout otherwise)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot
/// be initialized.
pub fn init_metadata_client(config: &ServerConfig) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .danger_accept_invalid_certs(!config.strict_tls);

    if let Some(timeout) = config.upstream_timeout {
        builder = builder.timeout(timeout);
    }

    if !config.strict_tls {
        log::warn!("TLS certificate validation is disabled for the metadata site");
    }

    Ok(builder.build()?)
}

/// Initializes the HTTP client used by the poller for the service and the
/// reverse geocoder.
pub fn init_poller_client(timeout: Option<Duration>) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Parses a configured base URL.
///
/// # Errors
///
/// Returns `InitializationError::UrlError` naming the offending value if it
/// does not parse or cannot carry a path (e.g. `mailto:`).
pub fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let parsed = Url::parse(raw).map_err(|source| InitializationError::UrlError {
        url: raw.to_string(),
        source,
    })?;
    if parsed.cannot_be_a_base() {
        return Err(InitializationError::UrlError {
            url: raw.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(parsed)
}

/// Appends path segments to `base`, percent-encoding each one.
pub fn endpoint_url<I>(base: &Url, segments: I) -> Url
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_metadata_client_default_config() {
        let client = init_metadata_client(&ServerConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_metadata_client_strict_with_timeout() {
        let config = ServerConfig {
            strict_tls: true,
            upstream_timeout: Some(Duration::from_secs(3)),
            ..Default::default()
        };
        assert!(init_metadata_client(&config).is_ok());
    }

    #[test]
    fn test_parse_base_url_valid() {
        let url = parse_base_url("https://geometas.com").unwrap();
        assert_eq!(url.host_str(), Some("geometas.com"));
    }

    #[test]
    fn test_parse_base_url_invalid_names_value() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(err.to_string().contains("not a url"));
        assert!(parse_base_url("mailto:a@b.c").is_err());
    }

    #[test]
    fn test_endpoint_url_appends_segments() {
        let base = parse_base_url("http://localhost:3000").unwrap();
        assert_eq!(
            endpoint_url(&base, ["api", "location"]).as_str(),
            "http://localhost:3000/api/location"
        );

        let nested = parse_base_url("http://localhost:3000/geo/").unwrap();
        assert_eq!(
            endpoint_url(&nested, ["reverse"]).as_str(),
            "http://localhost:3000/geo/reverse"
        );
    }
}
