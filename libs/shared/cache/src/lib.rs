//! Short-lived response cache shared by the stats cells.
//!
//! Key → (value, stored-at) map with a fixed freshness window. Expiry is
//! checked lazily on access: the `get` that finds a stale entry removes it
//! and reports a miss, so the caller re-fetches and overwrites. There is no
//! background eviction and no single-flight deduplication — two concurrent
//! misses on the same key may both hit the upstream and both store; the
//! last write wins.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

#[cfg(not(test))]
use std::time::Instant;
#[cfg(test)]
use mock_instant::Instant;

/// How long a cached response stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Builds the cache key for a player lookup.
///
/// Case-preserving on both parts: callers that spell the platform
/// differently address different entries, even though platform mapping
/// itself is case-insensitive. That asymmetry mirrors the upstream proxy
/// behavior and is intentional.
pub fn cache_key(platform: &str, username: &str) -> String {
    format!("{platform}:{username}")
}

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// In-memory TTL cache for normalized responses.
///
/// Constructed once per cell at startup and handed to the handlers as part
/// of their state — no ambient globals.
pub struct ResponseCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> ResponseCache<V> {
    /// Cache with the standard 5-minute freshness window.
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Cache with a custom freshness window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the cached value if one exists and is still fresh.
    ///
    /// A stale entry is removed here, as a side effect of the read that
    /// discovered it.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!("Cache hit: {key}");
                Some(entry.value.clone())
            }
            Some(_) => {
                debug!("Removing expired cache entry: {key}");
                entries.remove(key);
                None
            }
            None => {
                debug!("Cache miss: {key}");
                None
            }
        }
    }

    /// Inserts or replaces the entry, stamping it with the current time.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently held, fresh or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
