// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

use crate::identifier::EntityKind;

pub type Result<T> = std::result::Result<T, SpotifyError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    #[error("argument {name} out of range: {value}")]
    OutOfRange { name: &'static str, value: i64 },

    #[error("malformed spotify {kind} uri: {uri:?}")]
    MalformedIdentifier { kind: EntityKind, uri: String },

    #[error("not modified")]
    NotModified,

    #[error("bad request")]
    BadRequest,

    #[error("spotify rate limiting in effect")]
    RateLimited,

    /// Either the identifier is unknown to the service or the request path was wrong.
    #[error("resource not found")]
    NotFound,

    #[error("spotify internal server error")]
    ServiceInternalError,

    #[error("spotify service unavailable")]
    ServiceUnavailable,

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("unknown error: {message}")]
    Unknown {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

/// Discriminant of [`SpotifyError`], for branching without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    MalformedIdentifier,
    NotModified,
    BadRequest,
    RateLimited,
    NotFound,
    ServiceInternalError,
    ServiceUnavailable,
    NetworkError,
    Unknown,
}

impl SpotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::MalformedIdentifier { .. } => ErrorKind::MalformedIdentifier,
            Self::NotModified => ErrorKind::NotModified,
            Self::BadRequest => ErrorKind::BadRequest,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::NotFound => ErrorKind::NotFound,
            Self::ServiceInternalError => ErrorKind::ServiceInternalError,
            Self::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            Self::NetworkError(_) => ErrorKind::NetworkError,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    pub(crate) fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn unknown_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Unknown {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    /// Transport failures that never produced a complete response are network
    /// errors; anything else reqwest raises is unexpected.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_body() || err.is_request() {
            Self::NetworkError(err.to_string())
        } else {
            Self::unknown_with("unexpected transport failure", err)
        }
    }
}

impl From<serde_json::Error> for SpotifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown_with("failed to decode response", err)
    }
}
