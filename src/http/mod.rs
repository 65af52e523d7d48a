//! HTTP transport
//!
//! Every API call and every log poll goes through [`HttpClient`].
//!
//! # Features
//!
//! - **Automatic Retries**: 429 always, 5xx and connection failures on request
//! - **Rate Limiting**: Token bucket sized from the server's advertised limit
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Bearer token on every request

mod client;
mod rate_limit;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, MAX_RATE_LIMIT_WAIT,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
