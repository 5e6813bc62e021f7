// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Result, SpotifyError};

/// What the transport reported for one round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportOutcome {
    /// A response arrived with this status code.
    Completed(u16),
    /// The request never completed (network failure, timeout).
    Failed,
}

/// Map a transport outcome to "decode the body" (`Ok`) or an error kind.
///
/// `None` means no response object was produced at all.
pub fn classify(outcome: Option<TransportOutcome>) -> Result<()> {
    let status = match outcome {
        None => return Err(SpotifyError::unknown("no response")),
        Some(TransportOutcome::Failed) => {
            return Err(SpotifyError::NetworkError("request did not complete".to_string()))
        }
        Some(TransportOutcome::Completed(status)) => status,
    };

    match status {
        200 => Ok(()),
        304 => Err(SpotifyError::NotModified),
        400 | 406 => Err(SpotifyError::BadRequest),
        403 => Err(SpotifyError::RateLimited),
        // unknown uri and wrong path look the same from here
        404 => Err(SpotifyError::NotFound),
        500 => Err(SpotifyError::ServiceInternalError),
        503 => Err(SpotifyError::ServiceUnavailable),
        other => Err(SpotifyError::unknown(format!("unexpected status {other}"))),
    }
}
