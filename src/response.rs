//! The raw response value that flows through the request pipeline.
//!
//! A [`RawResponse`] is what the base client hands to the typed decoding step:
//! the body text plus enough metadata to log the exchange.

use http::StatusCode;
use std::time::Duration;

/// A successful response body with its transport metadata.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The raw response body.
    pub body: String,

    /// The HTTP status code. Always a 2xx value.
    pub status: StatusCode,

    /// Time spent on the network round trip. Zero for cache hits.
    pub latency: Duration,
}

impl RawResponse {
    pub fn new(body: String, status: StatusCode, latency: Duration) -> Self {
        Self {
            body,
            status,
            latency,
        }
    }

    /// Builds a response for a body served from the cache.
    pub fn cached(body: String) -> Self {
        Self::new(body, StatusCode::OK, Duration::ZERO)
    }
}
