// SPDX-License-Identifier: GPL-3.0-or-later

//! Client settings, deserializable from any serde source.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKUP_URL: &str = "http://ws.spotify.com/lookup/1/.json";
pub const DEFAULT_SEARCH_BASE_URL: &str = "http://ws.spotify.com/search/1";

/// Client-side admission control against the service's request budget.
///
/// The service throttles somewhere around ten requests per second; the
/// window carries an extra 500 ms because the server clock sees our requests
/// later than we send them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enforce: bool,
    pub window_ms: u64,
    pub max_requests: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enforce: true,
            window_ms: 1500,
            max_requests: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub lookup_url: String,
    pub search_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_plain_serde() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "lookup_url": "http://localhost:9000/lookup",
            "search_base_url": DEFAULT_SEARCH_BASE_URL,
            "timeout_secs": 5,
            "rate_limit": {"enforce": false, "window_ms": 250, "max_requests": 3}
        }))
        .unwrap();

        assert_eq!(config.lookup_url, "http://localhost:9000/lookup");
        assert_eq!(config.user_agent, None);
        assert_eq!(
            config.rate_limit,
            RateLimitConfig {
                enforce: false,
                window_ms: 250,
                max_requests: 3,
            }
        );
        assert_eq!(ClientConfig::default().rate_limit, RateLimitConfig::default());
    }
}
