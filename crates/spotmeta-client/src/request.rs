// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport-level request descriptors for the lookup and search endpoints.

use url::Url;

use crate::error::{Result, SpotifyError};
use crate::identifier::{EntityKind, Identifier};

/// Results per search page. Fixed by the service.
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// Offset of the first result on a 1-based `page`.
pub fn offset_for_page(page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(SEARCH_PAGE_SIZE)
}

/// Expansion for artist lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistExtra {
    /// Basic album records.
    Album,
    /// Fully populated album records.
    AlbumDetails,
}

/// Expansion for album lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumExtra {
    /// Basic track records.
    Track,
    /// Fully populated track records.
    TrackDetails,
}

impl ArtistExtra {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtistExtra::Album => "album",
            ArtistExtra::AlbumDetails => "albumdetails",
        }
    }
}

impl AlbumExtra {
    pub fn as_str(self) -> &'static str {
        match self {
            AlbumExtra::Track => "track",
            AlbumExtra::TrackDetails => "trackdetails",
        }
    }
}

/// `GET {lookup_url}?uri=..[&extras=..]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub uri: Identifier,
    pub extras: Option<&'static str>,
}

impl LookupRequest {
    pub fn artist(uri: &str, extra: Option<ArtistExtra>) -> Result<Self> {
        Ok(Self {
            uri: Identifier::validate(uri, EntityKind::Artist)?,
            extras: extra.map(ArtistExtra::as_str),
        })
    }

    pub fn album(uri: &str, extra: Option<AlbumExtra>) -> Result<Self> {
        Ok(Self {
            uri: Identifier::validate(uri, EntityKind::Album)?,
            extras: extra.map(AlbumExtra::as_str),
        })
    }

    pub fn track(uri: &str) -> Result<Self> {
        Ok(Self {
            uri: Identifier::validate(uri, EntityKind::Track)?,
            extras: None,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.uri.kind()
    }

    pub fn to_url(&self, lookup_url: &str) -> Result<Url> {
        let mut url = parse_base(lookup_url)?;
        url.query_pairs_mut().append_pair("uri", self.uri.as_str());
        if let Some(extras) = self.extras {
            url.query_pairs_mut().append_pair("extras", extras);
        }
        Ok(url)
    }
}

/// `GET {search_base}/{kind}.json?q=..[&page=..]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub kind: EntityKind,
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(kind: EntityKind, query: &str, page: i64) -> Result<Self> {
        if query.is_empty() {
            return Err(SpotifyError::InvalidArgument("query"));
        }
        let page = u32::try_from(page)
            .ok()
            .filter(|&page| page > 0)
            .ok_or(SpotifyError::OutOfRange {
                name: "page",
                value: page,
            })?;

        Ok(Self {
            kind,
            query: query.to_string(),
            page,
        })
    }

    pub fn offset(&self) -> u32 {
        offset_for_page(self.page)
    }

    pub fn to_url(&self, search_base_url: &str) -> Result<Url> {
        let mut url = parse_base(&format!(
            "{}/{}.json",
            search_base_url.trim_end_matches('/'),
            self.kind
        ))?;
        url.query_pairs_mut().append_pair("q", &self.query);
        if self.page != 1 {
            url.query_pairs_mut()
                .append_pair("page", &self.page.to_string());
        }
        Ok(url)
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| SpotifyError::unknown_with(format!("invalid endpoint {raw:?}"), e))
}
