//! HTTP transport: URL resolution, one GET per call, status classification.
//!
//! The transport knows nothing about caching or logging; the base client wraps
//! it with both. A non-2xx answer is turned into the matching error here so
//! that everything above only ever sees successful bodies.

use crate::config::ClientConfig;
use crate::{Error, RawResponse, Result};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::time::{Duration, Instant};
use url::Url;

#[derive(Debug, Clone)]
pub struct Transport {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl Transport {
    /// Builds the underlying `reqwest` client. No network I/O happens here.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            http::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                Error::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Resolves `path` (e.g. `/berry/cheri`) against the base URL and appends
    /// `query` pairs in order.
    ///
    /// Every path segment is percent-encoded on its own, so a segment can
    /// never escape into another part of the URL.
    pub fn resolve_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::Configuration(format!("Base URL cannot carry a path: {}", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Sends a GET to `url` and returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] on connection failure, timeout, or a body that
    ///   cannot be read.
    /// * [`Error::NotFound`] on 404.
    /// * [`Error::HttpStatus`] on any other non-2xx status.
    pub async fn send(&self, url: &Url) -> Result<RawResponse> {
        let start_time = Instant::now();

        let mut request = self.http_client.request(Method::GET, url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            let raw_response = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status,
                raw_response,
            });
        }

        let body = response.text().await?;
        Ok(RawResponse::new(body, status, start_time.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientArgs;

    fn transport(base_url: &str) -> Transport {
        let config = ClientConfig::resolve(ClientArgs::default().with_base_url(base_url)).unwrap();
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_resolve_url_keeps_base_path() {
        let transport = transport("https://pokeapi.co/api/v2");
        let url = transport.resolve_url("/berry/cheri", &[]).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/berry/cheri");
    }

    #[test]
    fn test_resolve_url_with_trailing_slash_base() {
        let transport = transport("https://pokeapi.co/api/v2/");
        let url = transport.resolve_url("/item/1", &[]).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/item/1");
    }

    #[test]
    fn test_resolve_url_on_bare_host() {
        let transport = transport("http://127.0.0.1:8080");
        let url = transport.resolve_url("/berry-flavor/spicy", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/berry-flavor/spicy");
    }

    #[test]
    fn test_resolve_url_appends_query_in_order() {
        let transport = transport("https://pokeapi.co/api/v2");
        let url = transport
            .resolve_url(
                "/item",
                &[("offset", "40".to_string()), ("limit", "20".to_string())],
            )
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/item?offset=40&limit=20");
    }

    #[test]
    fn test_resolve_url_encodes_segments() {
        let transport = transport("https://pokeapi.co/api/v2");
        let url = transport.resolve_url("/berry/a?b", &[]).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/berry/a%3Fb");
        assert!(url.query().is_none());
    }
}
