// SPDX-License-Identifier: GPL-3.0-or-later

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::identifier::{EntityKind, Identifier};

/// Artist information from the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Spotify artist uri.
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub href: Option<Identifier>,
    /// Artist name.
    #[serde(default)]
    pub name: String,
    /// Popularity, as reported by the service (e.g. "0.54").
    #[serde(default, deserialize_with = "string_or_number")]
    pub popularity: Option<String>,
    /// Albums; only populated when an album expansion was requested.
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Album information from the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Spotify album uri.
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub href: Option<Identifier>,
    /// Album title.
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub popularity: Option<String>,
    /// Release year.
    #[serde(rename = "released", default, deserialize_with = "string_or_number")]
    pub release_year: Option<String>,
    #[serde(rename = "external-ids", default)]
    pub external_ids: Vec<ExternalId>,
    /// Artists; only populated when expanded.
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub availability: Option<Availability>,
    /// Owning artist uri, only present in artist-expansion results.
    #[serde(rename = "artist-id", default, deserialize_with = "lenient_identifier")]
    pub artist_id: Option<Identifier>,
    /// Owning artist name, only present in artist-expansion results.
    #[serde(rename = "artist", default)]
    pub artist_name: Option<String>,
    /// Tracks; only populated when a track expansion was requested.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track information from the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Spotify track uri.
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub href: Option<Identifier>,
    /// Track title.
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub popularity: Option<String>,
    /// Owning album. A summary record in search results; absent when the
    /// track is itself embedded in an album lookup.
    #[serde(default)]
    pub album: Option<Album>,
    /// Length in seconds.
    #[serde(default, deserialize_with = "seconds")]
    pub length: Option<f64>,
    #[serde(rename = "track-number", default, deserialize_with = "string_or_number")]
    pub track_number: Option<String>,
    /// Only present in album-expansion results.
    #[serde(rename = "disc-number", default, deserialize_with = "string_or_number")]
    pub disc_number: Option<String>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(rename = "external-ids", default)]
    pub external_ids: Vec<ExternalId>,
    /// Only present in album-expansion results.
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

/// Identifier in an external catalog (e.g. an ISRC or UPC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalId {
    #[serde(rename = "type")]
    pub id_type: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Availability {
    /// Space separated region codes, e.g. "GB NO SE".
    #[serde(default)]
    pub territories: String,
}

/// Paging details for one page of search results.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResultInfo {
    pub query: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub offset: u32,
    /// Total matches as reported by the service; may be approximate.
    pub num_results: Option<u64>,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult<T> {
    pub info: SearchResultInfo,
    pub items: Vec<T>,
}

pub type ArtistSearchResult = SearchResult<Artist>;
pub type AlbumSearchResult = SearchResult<Album>;
pub type TrackSearchResult = SearchResult<Track>;

/// Accepts a JSON string or number; numbers are kept in their textual form.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// An unrecognised uri decodes to `None` rather than failing the whole body.
fn lenient_identifier<'de, D>(deserializer: D) -> Result<Option<Identifier>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| Identifier::parse(&raw).ok()))
}

fn seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(length) if length < 0.0 => Err(de::Error::custom(format!(
            "negative track length {length}"
        ))),
        other => Ok(other),
    }
}
