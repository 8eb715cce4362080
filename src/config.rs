//! Client construction options and their resolution against defaults.
//!
//! Callers describe what they want to change with [`ClientArgs`]; every field
//! is optional. [`ClientConfig::resolve`] merges those overrides with the
//! documented defaults into an immutable configuration owned by one client.
//!
//! Precedence is always the same: a value set by the caller wins, otherwise the
//! default applies.
//!
//! | Option | Default |
//! |---|---|
//! | `base_url` | [`BASE_URL`] |
//! | `timeout` | none |
//! | `logging.enabled` | `true` |
//! | `logging.level` | `INFO` |
//! | `logging.destination` | the current default subscriber |
//! | `cache.ttl` | zero (caching disabled) |
//! | `cache.max_entries` | unbounded |
//! | `cache.exclude_query` | `false` |

use crate::{Error, Result};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use url::Url;

/// Root of the PokéAPI REST endpoints.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Optional configuration passed to a client at construction.
///
/// # Examples
///
/// ```
/// use pokeapi_client::{CacheOptions, ClientArgs, LogOptions};
/// use std::time::Duration;
///
/// let args = ClientArgs::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_logging(LogOptions::default().with_enabled(false))
///     .with_cache(CacheOptions::default().with_ttl(Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientArgs {
    /// Overrides the upstream root URL.
    pub base_url: Option<String>,
    /// Per-request timeout. An expired timeout surfaces as a transport error.
    pub timeout: Option<Duration>,
    /// Logging overrides.
    pub logging: LogOptions,
    /// Cache overrides.
    pub cache: CacheOptions,
}

impl ClientArgs {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_logging(mut self, logging: LogOptions) -> Self {
        self.logging = logging;
        self
    }

    pub fn with_cache(mut self, cache: CacheOptions) -> Self {
        self.cache = cache;
        self
    }
}

/// Logging overrides.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Disabling suppresses every log event but leaves caching and transport untouched.
    pub enabled: Option<bool>,
    /// Most verbose level that is still emitted.
    pub level: Option<LevelFilter>,
    /// Subscriber that receives this client's events instead of the default one.
    pub destination: Option<Dispatch>,
}

impl LogOptions {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_destination(mut self, destination: Dispatch) -> Self {
        self.destination = Some(destination);
        self
    }
}

/// Cache policy overrides.
#[derive(Debug, Clone, Default)]
pub struct CacheOptions {
    /// How long a successful response stays fresh. Zero disables caching.
    pub ttl: Option<Duration>,
    /// Upper bound on stored entries.
    pub max_entries: Option<usize>,
    /// When `true`, requests carrying a query string (listings) bypass the cache.
    pub exclude_query: Option<bool>,
}

impl CacheOptions {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    pub fn with_exclude_query(mut self, exclude_query: bool) -> Self {
        self.exclude_query = Some(exclude_query);
        self
    }
}

/// Fully resolved configuration of one client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub logging: LoggingConfig,
    pub cache: CacheConfig,
}

/// Resolved logging settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LevelFilter,
    pub destination: Option<Dispatch>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::INFO,
            destination: None,
        }
    }
}

/// Resolved cache policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub max_entries: Option<usize>,
    pub exclude_query: bool,
}

impl CacheConfig {
    /// Returns `true` when responses may be stored at all.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.max_entries != Some(0)
    }
}

/// Longest accepted cache ttl.
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Caller value wins, otherwise the default.
fn merge<T>(caller: Option<T>, default: T) -> T {
    caller.unwrap_or(default)
}

impl ClientConfig {
    /// Merges caller overrides with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or cannot carry a path,
    /// the timeout is zero, or the cache ttl exceeds [`MAX_CACHE_TTL`].
    pub fn resolve(args: ClientArgs) -> Result<Self> {
        let base_url = Url::parse(&merge(args.base_url, BASE_URL.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        if args.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::Configuration(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        if args.cache.ttl.is_some_and(|ttl| ttl > MAX_CACHE_TTL) {
            return Err(Error::Configuration(format!(
                "Cache ttl must not exceed {:?}",
                MAX_CACHE_TTL
            )));
        }

        let log_defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            enabled: merge(args.logging.enabled, log_defaults.enabled),
            level: merge(args.logging.level, log_defaults.level),
            destination: args.logging.destination.or(log_defaults.destination),
        };

        let cache_defaults = CacheConfig::default();
        let cache = CacheConfig {
            ttl: merge(args.cache.ttl, cache_defaults.ttl),
            max_entries: args.cache.max_entries.or(cache_defaults.max_entries),
            exclude_query: merge(args.cache.exclude_query, cache_defaults.exclude_query),
        };

        Ok(Self {
            base_url,
            timeout: args.timeout,
            logging,
            cache,
        })
    }
}
