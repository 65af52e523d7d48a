//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. The bucket is sized
//! from the per-second limit the server advertises in `X-RateLimit-Limit`:
//! two thirds of it becomes the steady rate and one third the burst, so a
//! client can burst briefly and is then spread out evenly below the limit.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::warn;

/// Share of the advertised limit used as the steady request rate
const RATE_SHARE: f64 = 0.66;

/// Share of the advertised limit allowed as an initial burst
const BURST_SHARE: f64 = 0.33;

/// Configuration for rate limiting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Maximum number of requests per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 30,
            burst_size: 10,
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// Derive a config from a raw `X-RateLimit-Limit` header value.
    ///
    /// Returns `None` when the header is absent, unparsable or not positive,
    /// which means requests are not throttled client-side.
    pub fn from_advertised_limit(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let limit: f64 = match raw.parse() {
            Ok(limit) => limit,
            Err(e) => {
                warn!("Ignoring unparsable x-ratelimit-limit value {raw:?}: {e}");
                return None;
            }
        };
        if !limit.is_finite() || limit <= 0.0 {
            return None;
        }

        let rate = (limit * RATE_SHARE).floor().max(1.0) as u32;
        let burst = (limit * BURST_SHARE).floor().max(1.0) as u32;
        Some(Self::new(rate, burst))
    }
}

/// Token bucket rate limiter
///
/// Cloning shares the underlying bucket, so every clone of a client is
/// throttled jointly.
#[derive(Clone)]
pub struct RateLimiter {
    config: RateLimiterConfig,
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Self {
        let quota = Quota::per_second(non_zero(config.requests_per_second))
            .allow_burst(non_zero(config.burst_size));

        Self {
            config: config.clone(),
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// The configuration this limiter was built from
    pub fn config(&self) -> &RateLimiterConfig {
        &self.config
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .finish()
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}
