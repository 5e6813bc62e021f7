// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::config::RateLimitConfig;
use tokio::time::{sleep_until, Duration, Instant};

/// Default sliding window: the service allows about 10 requests per second,
/// plus 500 ms of slack for the delay before the server sees each request.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1500);
pub const DEFAULT_MAX_REQUESTS: usize = 10;

static SHARED: OnceLock<RateLimiter> = OnceLock::new();

/// Sliding-window rate limiter for metadata API calls.
///
/// Remembers the admission times of the last `max_requests` calls. A call
/// that would be the `max_requests + 1`th inside `window` waits until the
/// oldest one has aged out. Requests are delayed, never rejected.
///
/// Each caller reserves its slot under the lock before sleeping, so
/// admission order is the order in which callers reached the lock.
///
/// Clones share state, so one limiter can guard several clients.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<WindowState>>,
    window: Duration,
    max_requests: usize,
}

#[derive(Debug)]
struct WindowState {
    enforce: bool,
    /// Admission times, oldest first. Entries later than now are slots
    /// reserved by callers still waiting.
    admitted: VecDeque<Instant>,
}

impl RateLimiter {
    /// Create an independent limiter admitting at most `max_requests` per `window`.
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(WindowState {
                enforce: true,
                admitted: VecDeque::new(),
            })),
            window,
            max_requests: max_requests.max(1),
        }
    }

    /// The process-wide limiter, created on first use with the service defaults.
    pub fn shared() -> Self {
        SHARED
            .get_or_init(|| Self::new(DEFAULT_WINDOW, DEFAULT_MAX_REQUESTS))
            .clone()
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        let limiter = Self::new(Duration::from_millis(config.window_ms), config.max_requests);
        limiter.set_enforce(config.enforce);
        limiter
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Turn enforcement on or off. While off, [`acquire`](Self::acquire)
    /// returns immediately and records nothing.
    pub fn set_enforce(&self, enforce: bool) {
        let mut state = self.lock();
        state.enforce = enforce;
        if !enforce {
            state.admitted.clear();
        }
    }

    pub fn is_enforced(&self) -> bool {
        self.lock().enforce
    }

    /// Number of admissions still inside the window, including reserved slots.
    pub fn in_window(&self) -> usize {
        let mut state = self.lock();
        state.evict(Instant::now(), self.window);
        state.admitted.len()
    }

    /// Reserve the next free slot in the window and wait until it arrives.
    ///
    /// The lock is only held while reserving; waiting happens without it.
    pub async fn acquire(&self) {
        let (now, slot) = {
            let mut state = self.lock();
            if !state.enforce {
                return;
            }

            let now = Instant::now();
            (now, state.reserve(now, self.window, self.max_requests))
        };

        if slot > now {
            tracing::debug!(
                target: "spotify",
                "rate limiting: waiting {:?}",
                slot - now
            );
            sleep_until(slot).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, WindowState> {
        // The state is a plain queue; a panic elsewhere cannot leave it torn.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_MAX_REQUESTS)
    }
}

impl WindowState {
    fn evict(&mut self, now: Instant, window: Duration) {
        while let Some(&oldest) = self.admitted.front() {
            if now.saturating_duration_since(oldest) > window {
                self.admitted.pop_front();
            } else {
                break;
            }
        }
    }

    /// Record and return the earliest slot at which one more request keeps
    /// at most `max_requests` admissions in any `window`.
    fn reserve(&mut self, now: Instant, window: Duration, max_requests: usize) -> Instant {
        self.evict(now, window);

        let slot = match self.admitted.len().checked_sub(max_requests) {
            Some(index) => (self.admitted[index] + window).max(now),
            None => now,
        };
        self.admitted.push_back(slot);
        slot
    }
}
