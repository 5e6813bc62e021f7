// SPDX-License-Identifier: GPL-3.0-or-later

use crate::classify::{classify, TransportOutcome};
use crate::decode::{decode_lookup, decode_search};
use crate::error::{Result, SpotifyError};
use crate::identifier::EntityKind;
use crate::models::{
    Album, AlbumSearchResult, Artist, ArtistSearchResult, SearchResult, Track, TrackSearchResult,
};
use crate::rate_limiter::RateLimiter;
use crate::request::{AlbumExtra, ArtistExtra, LookupRequest, SearchRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::{ClientConfig, DEFAULT_LOOKUP_URL, DEFAULT_SEARCH_BASE_URL};
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

const USER_AGENT: &str = concat!("spotmeta/", env!("CARGO_PKG_VERSION"));

/// Spotify metadata API client with client-side rate limiting.
///
/// Every call validates its arguments before touching the network, waits for
/// admission from the [`RateLimiter`], then issues exactly one GET. Nothing is
/// retried; the caller owns retry policy.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    lookup_url: String,
    search_base_url: String,
    rate_limiter: RateLimiter,
}

impl SpotifyClient {
    /// Create a client with default endpoints and the process-wide limiter.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> SpotifyClientBuilder {
        SpotifyClientBuilder::default()
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Look up an artist by uri, optionally expanding its albums.
    ///
    /// # Example
    /// ```no_run
    /// # use spotmeta_client::{ArtistExtra, SpotifyClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SpotifyClient::new()?;
    /// let artist = client
    ///     .lookup_artist("spotify:artist:4YrKBkKSVeqDamzBPWVnSJ", Some(ArtistExtra::AlbumDetails))
    ///     .await?;
    /// println!("{} has {} albums", artist.name, artist.albums.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup_artist(&self, uri: &str, extra: Option<ArtistExtra>) -> Result<Artist> {
        self.lookup(LookupRequest::artist(uri, extra)?).await
    }

    /// Look up an album by uri, optionally expanding its tracks.
    pub async fn lookup_album(&self, uri: &str, extra: Option<AlbumExtra>) -> Result<Album> {
        self.lookup(LookupRequest::album(uri, extra)?).await
    }

    /// Look up a track by uri.
    pub async fn lookup_track(&self, uri: &str) -> Result<Track> {
        self.lookup(LookupRequest::track(uri)?).await
    }

    /// Search for artists. `page` is 1-based; each page holds up to 100 results.
    ///
    /// # Example
    /// ```no_run
    /// # use spotmeta_client::SpotifyClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SpotifyClient::new()?;
    /// let result = client.search_artists("Basement Jaxx", 1).await?;
    /// for artist in &result.items {
    ///     if let Some(uri) = &artist.href {
    ///         println!("{} ({})", artist.name, uri);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_artists(&self, query: &str, page: i64) -> Result<ArtistSearchResult> {
        self.search(SearchRequest::new(EntityKind::Artist, query, page)?)
            .await
    }

    /// Search for albums. `page` is 1-based.
    pub async fn search_albums(&self, query: &str, page: i64) -> Result<AlbumSearchResult> {
        self.search(SearchRequest::new(EntityKind::Album, query, page)?)
            .await
    }

    /// Search for tracks. `page` is 1-based.
    pub async fn search_tracks(&self, query: &str, page: i64) -> Result<TrackSearchResult> {
        self.search(SearchRequest::new(EntityKind::Track, query, page)?)
            .await
    }

    async fn lookup<T: DeserializeOwned>(&self, request: LookupRequest) -> Result<T> {
        let url = request.to_url(&self.lookup_url)?;
        let body = self.get(url).await?;
        decode_lookup(&body)
    }

    async fn search<T: DeserializeOwned>(
        &self,
        request: SearchRequest,
    ) -> Result<SearchResult<T>> {
        let url = request.to_url(&self.search_base_url)?;
        let body = self.get(url).await?;
        decode_search(&body, &request)
    }

    /// Internal method to perform rate-limited GET requests.
    async fn get(&self, url: Url) -> Result<String> {
        self.rate_limiter.acquire().await;

        trace!(target: "spotify", "GET {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            warn!(target: "spotify", "request did not complete: {}", err);
            SpotifyError::from(err)
        })?;

        let status = response.status();
        debug!(target: "spotify", "response status: {}", status);

        if let Err(err) = classify(Some(TransportOutcome::Completed(status.as_u16()))) {
            warn!(target: "spotify", "request failed: {}", err);
            return Err(err);
        }

        let body = response.text().await?;
        trace!(target: "spotify", "response body: {}", body);
        Ok(body)
    }
}

/// Builder for configuring a Spotify metadata client.
#[derive(Debug)]
pub struct SpotifyClientBuilder {
    lookup_url: String,
    search_base_url: String,
    timeout: Duration,
    user_agent: String,
    rate_limiter: Option<RateLimiter>,
}

impl Default for SpotifyClientBuilder {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
            rate_limiter: None,
        }
    }
}

impl SpotifyClientBuilder {
    /// Apply endpoints, timeout and limiter settings from configuration.
    ///
    /// The configured limiter is independent of the process-wide one.
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.lookup_url = config.lookup_url.clone();
        self.search_base_url = config.search_base_url.clone();
        self.timeout = Duration::from_secs(config.timeout_secs);
        if let Some(user_agent) = &config.user_agent {
            self.user_agent = user_agent.clone();
        }
        self.rate_limiter = Some(RateLimiter::from_config(&config.rate_limit));
        self
    }

    /// Set the lookup endpoint (useful for testing with mock servers).
    pub fn lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_url = url.into();
        self
    }

    /// Set the search base url; `/{kind}.json` is appended per search.
    pub fn search_base_url(mut self, url: impl Into<String>) -> Self {
        self.search_base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use this limiter instead of the process-wide one.
    pub fn rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Build the Spotify metadata client.
    pub fn build(self) -> Result<SpotifyClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(SpotifyClient {
            client,
            lookup_url: self.lookup_url,
            search_base_url: self.search_base_url,
            rate_limiter: self.rate_limiter.unwrap_or_else(RateLimiter::shared),
        })
    }
}
