//! Sliding-window rate limiter for Aurora.
//!
//! Bounds the request rate to a sensitive endpoint (login) per client
//! identity. Approximate sliding window over a timestamp vector, not a
//! token bucket; state lives in the process and resets on restart, which is
//! acceptable for abuse mitigation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default window matching the login middleware: 10 requests per minute.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_REQUESTS: usize = 10;

/// Keyed sliding-window counter with explicit window/threshold
/// configuration. Construct one per deployment unit and inject it wherever
/// the gate is needed; there is no hidden global.
pub struct RateLimiter {
    window: Duration,
    max_requests: usize,
    hits: HashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            window,
            max_requests,
            hits: HashMap::new(),
        }
    }

    /// Checks and records a request for `identity` at the current instant.
    /// Returns `false` when the request must be rejected.
    pub fn allow(&mut self, identity: &str) -> bool {
        self.allow_at(identity, Instant::now())
    }

    /// Clock-injected variant of [`allow`](Self::allow).
    ///
    /// Timestamps older than the window are pruned first. A request is
    /// rejected once the window already holds `max_requests` entries, and a
    /// rejected request is never recorded.
    pub fn allow_at(&mut self, identity: &str, now: Instant) -> bool {
        let recent = self.hits.entry(identity.to_string()).or_default();
        recent.retain(|&ts| now.duration_since(ts) < self.window);

        if recent.len() >= self.max_requests {
            return false;
        }
        recent.push(now);
        true
    }

    /// Number of recorded requests currently inside the window for an
    /// identity, pruning as a side effect.
    pub fn recorded_at(&mut self, identity: &str, now: Instant) -> usize {
        let recent = self.hits.entry(identity.to_string()).or_default();
        recent.retain(|&ts| now.duration_since(ts) < self.window);
        recent.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_MAX_REQUESTS)
    }
}
