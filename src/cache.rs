//! Bounded in-memory store for fetched weather documents.
//!
//! Keyed on the normalized location string. Capacity is enforced at
//! insertion time by evicting the entry with the oldest capture time.
//! That is oldest-capture, not least-recently-used: an entry the poller
//! just refreshed is protected even if no caller has read it since.
//!
//! Freshness is deliberately not this module's concern: [`WeatherCache::get`]
//! returns whatever is stored and the caller decides whether the entry's age
//! is acceptable.

use std::collections::HashMap;

use parking_lot::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::model::CurrentWeather;
use crate::telemetry;

/// A stored document plus the instant it was captured.
///
/// `captured_at` is set on insertion and overwritten on every refresh;
/// it never decreases.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: CurrentWeather,
    pub captured_at: Instant,
}

/// Derive the cache key for a raw location string.
///
/// Trims surrounding whitespace and lower-cases, so `"  Paris "` and
/// `"PARIS"` share one cache slot.
pub fn normalize_key(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Bounded, concurrency-safe mapping from normalized location to entry.
#[derive(Debug)]
pub struct WeatherCache {
    capacity: usize,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl WeatherCache {
    /// Create an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up an entry by normalized key.
    ///
    /// Plain read, no side effects and no expiry check; age is the
    /// caller's concern.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Insert or refresh an entry, stamping it with the current instant.
    ///
    /// An existing key is overwritten in place (payload and timestamp move
    /// together under one write lock). A new key while the store is full
    /// first evicts the entry with the smallest `captured_at`; ties among
    /// equal capture times are broken arbitrarily.
    pub fn put(&self, key: &str, payload: CurrentWeather) {
        let mut entries = self.entries.write();

        if !entries.contains_key(key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.captured_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL).increment(1);
                debug!(evicted = %oldest, "cache at capacity, evicted oldest entry");
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                captured_at: Instant::now(),
            },
        );
    }

    /// Remove every entry in one atomic step.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point-in-time copy of the stored keys, safe to iterate while
    /// writers proceed.
    pub fn snapshot_keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Point-in-time copy of the stored entries.
    pub fn snapshot_entries(&self) -> Vec<CacheEntry> {
        self.entries.read().values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_key("  Paris "), "paris");
        assert_eq!(normalize_key("PARIS"), "paris");
        assert_eq!(normalize_key("São Paulo"), "são paulo");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_key("  New York ");
        assert_eq!(normalize_key(&once), once);
    }
}
