//! The shared request pipeline every resource client embeds.
//!
//! [`BaseClient`] owns one transport, one response cache and one logger, all
//! private to the instance. Two clients constructed separately never share
//! cache entries or log destinations; clones of one client share both.

use crate::cache::{CacheKey, ResponseCache};
use crate::config::{ClientArgs, ClientConfig};
use crate::interceptors::{self, RequestContext};
use crate::logger::Logger;
use crate::transport::Transport;
use crate::{Error, RawResponse, Result};
use http::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BaseClient {
    inner: Arc<BaseClientInner>,
}

#[derive(Debug)]
struct BaseClientInner {
    config: ClientConfig,
    transport: Transport,
    cache: ResponseCache,
    logger: Logger,
}

impl BaseClient {
    /// Wires transport, cache and logger from `args` merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(args: ClientArgs) -> Result<Self> {
        let config = ClientConfig::resolve(args)?;
        let transport = Transport::new(&config)?;
        let cache = ResponseCache::new(config.cache.clone());
        let logger = Logger::new(&config.logging);

        Ok(Self {
            inner: Arc::new(BaseClientInner {
                config,
                transport,
                cache,
                logger,
            }),
        })
    }

    /// The resolved configuration of this client.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The response cache owned by this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.inner.cache
    }

    pub(crate) fn logger(&self) -> &Logger {
        &self.inner.logger
    }

    /// Fetches `path` with `query`, serving a fresh cached body when one exists.
    ///
    /// Only a cache miss reaches the network. The key is handed back with a
    /// network response that may be stored; the caller stores it once the body
    /// has proven usable. Every error is logged once by the matching hook and
    /// returned unchanged.
    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(RawResponse, Option<CacheKey>)> {
        let inner = &self.inner;

        let url = match inner.transport.resolve_url(path, query) {
            Ok(url) => url,
            Err(e) => {
                let ctx = RequestContext::new(Method::GET, path);
                return Err(interceptors::on_request_error(e, &ctx, &inner.logger));
            }
        };

        let ctx = RequestContext::new(Method::GET, url.as_str());
        let key = inner
            .cache
            .accepts(&url)
            .then(|| CacheKey::new(Method::GET, &url));

        if let Some(key) = &key {
            if let Some(body) = inner.cache.get(key) {
                interceptors::on_cache_hit(ctx, &inner.logger);
                return Ok((RawResponse::cached(body), None));
            }
        }

        let ctx = interceptors::on_request(ctx, &inner.logger);
        match inner.transport.send(&url).await {
            Ok(response) => Ok((interceptors::on_response(response, &ctx, &inner.logger), key)),
            Err(e) if e.is_request_side() => {
                Err(interceptors::on_request_error(e, &ctx, &inner.logger))
            }
            Err(e) => Err(interceptors::on_response_error(e, &ctx, &inner.logger)),
        }
    }

    /// Fetches `path` and decodes the body into `T`.
    ///
    /// A body that does not match `T` is a [`Error::Decode`]; it is never
    /// defaulted into a partial value and never stored in the cache.
    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (response, key) = self.fetch(path, query).await?;

        let value = match serde_json::from_str::<T>(&response.body) {
            Ok(value) => value,
            Err(e) => {
                let ctx = RequestContext::new(Method::GET, path);
                let error = Error::Decode {
                    raw_response: response.body,
                    serde_error: e.to_string(),
                };
                return Err(interceptors::on_response_error(error, &ctx, &self.inner.logger));
            }
        };

        if let Some(key) = key {
            self.inner.cache.insert(key, response.body);
        }

        Ok(value)
    }
}
