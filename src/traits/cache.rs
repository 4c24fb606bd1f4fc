//! Key-value cache trait abstraction.
//!
//! The stats widget keeps one entry per profile. Entries are stored as a
//! `{timestamp, data}` envelope and are never expired by the store itself;
//! freshness is decided by the reader via [`CacheEntry::is_fresh`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Reading or writing the backing storage failed.
    #[error("cache IO error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// The stored envelope could not be encoded or decoded.
    #[error("cache serialization error for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A stored value together with the time it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    /// Milliseconds since the Unix epoch at write time.
    pub timestamp: i64,
    /// The cached payload.
    pub data: V,
}

impl<V> CacheEntry<V> {
    pub fn new(timestamp: i64, data: V) -> Self {
        Self { timestamp, data }
    }

    /// Age of the entry at `now_millis`. Clock skew into the future counts as zero.
    pub fn age_millis(&self, now_millis: i64) -> i64 {
        (now_millis - self.timestamp).max(0)
    }

    /// An entry is fresh while its age is strictly below `window`.
    pub fn is_fresh(&self, now_millis: i64, window: Duration) -> bool {
        let window_millis = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        self.age_millis(now_millis) < window_millis
    }
}

/// Trait for cache storage.
///
/// Implementations include the file-backed
/// [`FileCache`](crate::adapters::FileCache) and the in-memory
/// [`InMemoryCache`](crate::adapters::mock::InMemoryCache).
#[async_trait]
pub trait CacheStore<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Look up the entry stored under `key`, fresh or not.
    ///
    /// # Returns
    /// - `Ok(Some(entry))` if an entry exists
    /// - `Ok(None)` if nothing is stored under `key`
    /// - `Err(error)` if the storage could not be read
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>, CacheError>;

    /// Store `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: V, stored_at_millis: i64) -> Result<(), CacheError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_entry_fresh_within_window() {
        let entry = CacheEntry::new(1_000, "payload");
        assert!(entry.is_fresh(1_000, HOUR));
        assert!(entry.is_fresh(1_000 + 3_599_999, HOUR));
    }

    #[test]
    fn test_entry_stale_at_exactly_one_window() {
        let entry = CacheEntry::new(1_000, "payload");
        assert!(!entry.is_fresh(1_000 + 3_600_000, HOUR));
        assert!(!entry.is_fresh(1_000 + 7_200_000, HOUR));
    }

    #[test]
    fn test_entry_from_the_future_is_fresh() {
        let entry = CacheEntry::new(10_000, 1u8);
        assert_eq!(entry.age_millis(5_000), 0);
        assert!(entry.is_fresh(5_000, HOUR));
    }

    #[test]
    fn test_entry_envelope_shape() {
        let entry = CacheEntry::new(42, vec![1, 2]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"timestamp": 42, "data": [1, 2]}));
    }

    #[test]
    fn test_cache_error_display() {
        let err = CacheError::Io {
            key: "github_stats_octocat".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("github_stats_octocat"));
        assert!(err.to_string().contains("denied"));
    }
}
