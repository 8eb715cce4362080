//! Time-bounded in-memory response cache.
//!
//! Entries are keyed by request method plus the fully resolved URL, query
//! string included, so two listings with different pages never collide. Only
//! bodies that decoded successfully are stored. Expiry and the size bound are
//! enforced by a `moka` cache, so expired entries are reclaimed even when
//! their key is never requested again.

use crate::config::CacheConfig;
use http::Method;
use moka::sync::Cache;
use url::Url;

/// Identity of a cacheable request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: Method,
    url: String,
}

impl CacheKey {
    pub fn new(method: Method, url: &Url) -> Self {
        Self {
            method,
            url: url.as_str().to_string(),
        }
    }
}

/// Response cache owned by one client.
///
/// Lookups and stores never suspend. Concurrent misses on the same key both
/// fetch and the last store wins. A disabled policy (zero ttl or zero
/// capacity) builds no store at all.
#[derive(Debug)]
pub struct ResponseCache {
    config: CacheConfig,
    entries: Option<Cache<CacheKey, String>>,
}

impl ResponseCache {
    pub fn new(config: CacheConfig) -> Self {
        let entries = config.is_enabled().then(|| {
            let mut builder = Cache::builder().time_to_live(config.ttl);
            if let Some(max) = config.max_entries {
                builder = builder.max_capacity(max as u64);
            }
            builder.build()
        });

        Self { config, entries }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns `true` if a request to `url` may be served from or stored in the cache.
    pub fn accepts(&self, url: &Url) -> bool {
        self.entries.is_some() && !(self.config.exclude_query && url.query().is_some())
    }

    /// Returns the fresh body stored under `key`, if any.
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.as_ref()?.get(key)
    }

    /// Stores a body under `key`, expiring `ttl` from now.
    pub fn insert(&self, key: CacheKey, body: String) {
        if let Some(entries) = &self.entries {
            entries.insert(key, body);
        }
    }

    /// Number of live entries. Expired ones are reclaimed before counting.
    pub fn len(&self) -> u64 {
        match &self.entries {
            Some(entries) => {
                entries.run_pending_tasks();
                entries.entry_count()
            }
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.invalidate_all();
            entries.run_pending_tasks();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn cache(ttl: Duration, max_entries: Option<usize>) -> ResponseCache {
        ResponseCache::new(CacheConfig {
            ttl,
            max_entries,
            exclude_query: false,
        })
    }

    fn key(url: &str) -> CacheKey {
        CacheKey::new(Method::GET, &Url::parse(url).unwrap())
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = cache(Duration::from_secs(10), None);
        let k = key("https://pokeapi.co/api/v2/berry/cheri");

        cache.insert(k.clone(), "{\"id\":1}".to_string());

        assert_eq!(cache.get(&k), Some("{\"id\":1}".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_after_ttl() {
        let cache = cache(Duration::from_millis(50), None);
        let k = key("https://pokeapi.co/api/v2/berry/cheri");

        cache.insert(k.clone(), "{}".to_string());
        thread::sleep(Duration::from_millis(120));

        assert_eq!(cache.get(&k), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entries_are_not_counted() {
        let cache = cache(Duration::from_millis(300), None);

        for id in 1..=200 {
            cache.insert(
                key(&format!("https://pokeapi.co/api/v2/item/{}", id)),
                "{}".to_string(),
            );
        }
        assert_eq!(cache.len(), 200);

        thread::sleep(Duration::from_millis(500));
        for id in 201..=210 {
            cache.insert(
                key(&format!("https://pokeapi.co/api/v2/item/{}", id)),
                "{}".to_string(),
            );
        }

        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn test_zero_ttl_stores_nothing() {
        let cache = cache(Duration::ZERO, None);
        let k = key("https://pokeapi.co/api/v2/berry/1");

        cache.insert(k.clone(), "{}".to_string());

        assert!(cache.is_empty());
        assert_eq!(cache.get(&k), None);
        assert!(!cache.accepts(&Url::parse("https://pokeapi.co/api/v2/berry/1").unwrap()));
    }

    #[test]
    fn test_query_is_part_of_key() {
        let cache = cache(Duration::from_secs(10), None);
        let first = key("https://pokeapi.co/api/v2/item?offset=0&limit=20");
        let second = key("https://pokeapi.co/api/v2/item?offset=20&limit=20");

        cache.insert(first.clone(), "page one".to_string());

        assert_eq!(cache.get(&first), Some("page one".to_string()));
        assert_eq!(cache.get(&second), None);
    }

    #[test]
    fn test_method_is_part_of_key() {
        let url = Url::parse("https://pokeapi.co/api/v2/berry/1").unwrap();
        assert_ne!(
            CacheKey::new(Method::GET, &url),
            CacheKey::new(Method::HEAD, &url)
        );
    }

    #[test]
    fn test_capacity_bounds_entry_count() {
        let cache = cache(Duration::from_secs(10), Some(2));

        for id in 1..=5 {
            cache.insert(
                key(&format!("https://pokeapi.co/api/v2/berry/{}", id)),
                "{}".to_string(),
            );
        }

        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_replacing_existing_key_keeps_one_entry() {
        let cache = cache(Duration::from_secs(10), Some(1));
        let a = key("https://pokeapi.co/api/v2/berry/1");

        cache.insert(a.clone(), "old".to_string());
        cache.insert(a.clone(), "new".to_string());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&a), Some("new".to_string()));
    }

    #[test]
    fn test_exclude_query() {
        let cache = ResponseCache::new(CacheConfig {
            ttl: Duration::from_secs(10),
            max_entries: None,
            exclude_query: true,
        });

        assert!(cache.accepts(&Url::parse("https://pokeapi.co/api/v2/item/1").unwrap()));
        assert!(!cache.accepts(&Url::parse("https://pokeapi.co/api/v2/item?limit=20").unwrap()));
    }

    #[test]
    fn test_clear() {
        let cache = cache(Duration::from_secs(10), None);
        cache.insert(key("https://pokeapi.co/api/v2/item/1"), "x".to_string());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
