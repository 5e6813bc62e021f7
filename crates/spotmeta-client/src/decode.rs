// SPDX-License-Identifier: GPL-3.0-or-later

//! Response body decoding.
//!
//! Lookup bodies look like `{"info": {...}, "artist": {...}}`; search bodies
//! like `{"info": {...}, "artists": [...]}`. Malformed bodies surface as
//! [`SpotifyError::Unknown`](crate::error::SpotifyError::Unknown) with the parse error attached.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{SearchResult, SearchResultInfo};
use crate::request::{SearchRequest, SEARCH_PAGE_SIZE};

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct LookupEnvelope<T> {
    #[serde(alias = "artist", alias = "album", alias = "track")]
    entity: T,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct SearchEnvelope<T> {
    #[serde(default)]
    info: WireSearchInfo,
    #[serde(default, alias = "artists", alias = "albums", alias = "tracks")]
    items: Vec<T>,
}

/// Search `info` block as the service sends it.
#[derive(Debug, Default, Deserialize)]
struct WireSearchInfo {
    query: Option<String>,
    num_results: Option<u64>,
}

/// Decode a lookup body and unwrap the single entity.
pub fn decode_lookup<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: LookupEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.entity)
}

/// Decode a search body. Kind and paging fields are derived from `request`,
/// not read from the wire.
pub fn decode_search<T: DeserializeOwned>(
    body: &str,
    request: &SearchRequest,
) -> Result<SearchResult<T>> {
    let envelope: SearchEnvelope<T> = serde_json::from_str(body)?;

    Ok(SearchResult {
        info: SearchResultInfo {
            query: envelope.info.query.unwrap_or_else(|| request.query.clone()),
            kind: request.kind,
            page: request.page,
            limit: SEARCH_PAGE_SIZE,
            offset: request.offset(),
            num_results: envelope.info.num_results,
        },
        items: envelope.items,
    })
}
