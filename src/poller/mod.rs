//! Headless client that follows the service's location.
//!
//! Each poll reads `/api/location`. A new or moved reading is reverse
//! geocoded; a newly resolved country has its metadata fragment fetched from
//! `/api/country-metadata`. Polling the same reading again does nothing.

mod geocode;
mod tracker;

use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::PollerConfig;
use crate::error_handling::{InitializationError, PollError};
use crate::initialization::{endpoint_url, init_poller_client, parse_base_url};
use crate::location::Reading;

pub use geocode::{Place, ReverseGeocoder};
pub use tracker::ChangeTracker;

/// What a single poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The service has no reading yet.
    Idle,
    /// A reading exists but has not moved enough to act on.
    Located,
    /// The reading was reverse geocoded; the country needs no new metadata.
    Resolved,
    /// The metadata for a new country was fetched (or cleared on failure).
    Annotated,
}

/// Everything the poller currently knows.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// Last reading that triggered a reverse geocode
    pub reading: Option<Reading>,
    pub place: Option<Place>,
    /// Metadata fragment for `place.country`; `None` if the fetch failed
    pub metadata: Option<String>,
}

pub struct Poller {
    http: reqwest::Client,
    location_url: Url,
    metadata_url: Url,
    geocoder: ReverseGeocoder,
    tracker: ChangeTracker,
    view: View,
}

impl Poller {
    /// # Errors
    ///
    /// Fails if a configured URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &PollerConfig) -> Result<Self, InitializationError> {
        let http = init_poller_client(None)?;
        let server = parse_base_url(&config.server_url)?;
        let geocoder = ReverseGeocoder::new(http.clone(), &config.geocoder_url)?;

        Ok(Self {
            location_url: endpoint_url(&server, ["api", "location"]),
            metadata_url: endpoint_url(&server, ["api", "country-metadata"]),
            http,
            geocoder,
            tracker: ChangeTracker::new(),
            view: View::default(),
        })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Runs one poll and any follow-up fetches it triggers.
    ///
    /// # Errors
    ///
    /// Only a failure to read `/api/location` is an error. Geocoding failures
    /// become an unknown place and metadata failures clear the fragment.
    pub async fn poll_once(&mut self) -> Result<Phase, PollError> {
        let Some(reading) = self.fetch_location().await? else {
            return Ok(Phase::Idle);
        };

        if !self.tracker.observe_coordinates(reading.lat, reading.lng) {
            return Ok(Phase::Located);
        }

        let place = match self.geocoder.reverse(reading.lat, reading.lng).await {
            Ok(place) => place,
            Err(e) => {
                warn!("Reverse geocoding error: {e}");
                Place::unknown()
            }
        };
        info!(
            "Location {}, {} resolved to {}, {}",
            reading.lat, reading.lng, place.city, place.country
        );

        let fetch_metadata = self.tracker.observe_country(&place.country);
        let country = place.country.clone();
        self.view.reading = Some(reading);
        self.view.place = Some(place);

        if !fetch_metadata {
            return Ok(Phase::Resolved);
        }

        self.view.metadata = match self.fetch_metadata(&country).await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("Country metadata fetch error: {e}");
                None
            }
        };
        Ok(Phase::Annotated)
    }

    /// Polls every `interval` until `shutdown` is cancelled, calling
    /// `on_update` after each poll that changed the view.
    ///
    /// Cancellation also aborts a poll in flight; the view keeps whatever
    /// that poll had already stored.
    pub async fn run<F>(mut self, interval: Duration, shutdown: CancellationToken, mut on_update: F)
    where
        F: FnMut(Phase, &View),
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Polling {} every {:?}", self.location_url, interval);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                _ = shutdown.cancelled() => break,
                result = self.poll_once() => result,
            };
            match result {
                Ok(phase @ (Phase::Resolved | Phase::Annotated)) => on_update(phase, &self.view),
                Ok(phase) => debug!("Poll finished: {phase:?}"),
                Err(e) => warn!("{e}"),
            }
        }
        info!("Poller stopped");
    }

    async fn fetch_location(&self) -> Result<Option<Reading>, PollError> {
        let response = self.http.get(self.location_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status));
        }
        Ok(response.json().await?)
    }

    async fn fetch_metadata(&self, country: &str) -> Result<String, PollError> {
        let mut url = self.metadata_url.clone();
        url.query_pairs_mut().append_pair("country", country);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status));
        }
        Ok(response.text().await?)
    }
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("location_url", &self.location_url.as_str())
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

/// Builds a poller from `config` and runs it until `shutdown` is cancelled.
pub async fn run_poller<F>(
    config: PollerConfig,
    shutdown: CancellationToken,
    on_update: F,
) -> Result<(), anyhow::Error>
where
    F: FnMut(Phase, &View),
{
    let poller = Poller::new(&config)?;
    poller.run(config.interval, shutdown, on_update).await;
    Ok(())
}

