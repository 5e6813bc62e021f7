// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotifyError};

pub const SCHEME: &str = "spotify";

/// Entity kinds the metadata service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Album,
    Track,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Artist, EntityKind::Album, EntityKind::Track];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Track => "track",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `spotify:{kind}:{token}` uri.
///
/// The textual form is kept exactly as given so it can be echoed back to the
/// service; only the scheme and kind are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    raw: String,
    kind: EntityKind,
    token_start: usize,
}

impl Identifier {
    /// Validate `raw` as an identifier of `expected` kind.
    pub fn validate(raw: &str, expected: EntityKind) -> Result<Self> {
        if raw.is_empty() {
            return Err(SpotifyError::InvalidArgument("uri"));
        }

        match Self::split(raw, expected) {
            Some(token_start) => Ok(Self {
                raw: raw.to_string(),
                kind: expected,
                token_start,
            }),
            None => Err(SpotifyError::MalformedIdentifier {
                kind: expected,
                uri: raw.to_string(),
            }),
        }
    }

    /// Parse an identifier of any known kind, as carried in `href` fields.
    pub fn parse(raw: &str) -> Result<Self> {
        EntityKind::ALL
            .into_iter()
            .find_map(|kind| Self::validate(raw, kind).ok())
            .ok_or_else(|| SpotifyError::unknown(format!("unrecognized spotify uri {raw:?}")))
    }

    /// Byte offset of the token when `raw` starts with `spotify:{kind}:` and
    /// the token is non-empty.
    fn split(raw: &str, kind: EntityKind) -> Option<usize> {
        let prefix_len = SCHEME.len() + kind.as_str().len() + 2;
        let head = raw.get(..prefix_len)?;
        let expected = format!("{SCHEME}:{kind}:");
        if !head.eq_ignore_ascii_case(&expected) || raw.len() == prefix_len {
            return None;
        }
        Some(prefix_len)
    }

    pub fn scheme(&self) -> &'static str {
        SCHEME
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn token(&self) -> &str {
        &self.raw[self.token_start..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for Identifier {
    type Error = SpotifyError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.raw
    }
}
