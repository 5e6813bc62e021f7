// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the Spotify metadata web service.
//!
//! Supports artist, album and track lookup by `spotify:` uri and paged free
//! text search, with built-in client-side rate limiting so callers stay under
//! the service's request budget.

pub mod classify;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod identifier;
pub mod models;
pub mod rate_limiter;
pub mod request;

pub use client::{SpotifyClient, SpotifyClientBuilder};
pub use config::{ClientConfig, RateLimitConfig};
pub use error::{ErrorKind, Result, SpotifyError};
pub use identifier::{EntityKind, Identifier};
pub use models::{
    Album, AlbumSearchResult, Artist, ArtistSearchResult, Availability, ExternalId, SearchResult,
    SearchResultInfo, Track, TrackSearchResult,
};
pub use rate_limiter::RateLimiter;
pub use request::{AlbumExtra, ArtistExtra, SEARCH_PAGE_SIZE};
