//! Metadata site client.

use log::{debug, info, warn};
use reqwest::StatusCode;
use url::Url;

use super::extract::{extract_main_content, normalize_country_name};
use crate::config::{METADATA_PATH_PREFIX, NO_METADATA_FRAGMENT, UNAVAILABLE_METADATA_FRAGMENT};
use crate::error_handling::{EventType, InitializationError, MetadataError, ServiceStats};
use crate::initialization::{endpoint_url, parse_base_url};

/// An HTML snippet meant for direct embedding. Not sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for HtmlFragment {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HtmlFragment {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A successful answer from the metadata site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataPage {
    /// 200: the extracted `<main>` content (or the whole body).
    Found(HtmlFragment),
    /// 404: the site has no page for this country.
    NotFound,
}

impl MetadataPage {
    /// Fragment to serve. A missing page becomes the "no metadata" notice.
    pub fn into_fragment(self) -> HtmlFragment {
        match self {
            MetadataPage::Found(fragment) => fragment,
            MetadataPage::NotFound => HtmlFragment::from(NO_METADATA_FRAGMENT),
        }
    }
}

/// Fetches country pages from the metadata site.
#[derive(Clone)]
pub struct MetadataClient {
    http: reqwest::Client,
    base: Url,
}

impl MetadataClient {
    /// # Errors
    ///
    /// Returns `InitializationError::UrlError` if `base_url` does not parse or
    /// cannot carry a path (e.g. `mailto:`).
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, InitializationError> {
        let base = parse_base_url(base_url)?;
        Ok(Self { http, base })
    }

    /// URL of the page for `country`: `<base>/metas/countries/<normalized>/`.
    ///
    /// The normalized name is pushed as one percent-encoded segment, so a `/`
    /// or `..` in the name stays inside it.
    pub fn page_url(&self, country: &str) -> Url {
        let name = normalize_country_name(country);
        let segments = METADATA_PATH_PREFIX.iter().copied().chain([name.as_str(), ""]);
        endpoint_url(&self.base, segments)
    }

    /// Fetches the metadata page for `country`.
    ///
    /// 404 is a successful [`MetadataPage::NotFound`]. Any other status but
    /// 200 is [`MetadataError::Upstream`]; network failures are
    /// [`MetadataError::Transport`].
    pub async fn fetch(&self, country: &str) -> Result<MetadataPage, MetadataError> {
        let url = self.page_url(country);
        debug!("Fetching country metadata from {url}");

        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(MetadataPage::Found(HtmlFragment::from(
                    extract_main_content(&body),
                )))
            }
            StatusCode::NOT_FOUND => Ok(MetadataPage::NotFound),
            status => Err(MetadataError::Upstream(status)),
        }
    }

    /// Like [`fetch`](Self::fetch), but never fails: errors are logged,
    /// counted, and replaced by the "unable to load" fragment.
    pub async fn fetch_or_fallback(&self, country: &str, stats: &ServiceStats) -> HtmlFragment {
        match self.fetch(country).await {
            Ok(page) => {
                let event = match page {
                    MetadataPage::Found(_) => EventType::MetadataServed,
                    MetadataPage::NotFound => {
                        info!("No metadata page for {country}");
                        EventType::MetadataNotFound
                    }
                };
                stats.record(event);
                page.into_fragment()
            }
            Err(e) => {
                warn!("Country metadata fetch error for {country} ({}): {e}", e.event_type());
                stats.record(e.event_type());
                HtmlFragment::from(UNAVAILABLE_METADATA_FRAGMENT)
            }
        }
    }
}
