//! In-memory cache for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{CacheEntry, CacheError, CacheStore};

/// In-memory [`CacheStore`] that also counts reads and writes.
#[derive(Debug, Clone)]
pub struct InMemoryCache<V> {
    entries: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
    reads: Arc<Mutex<usize>>,
    writes: Arc<Mutex<usize>>,
}

impl<V> Default for InMemoryCache<V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            reads: Arc::new(Mutex::new(0)),
            writes: Arc::new(Mutex::new(0)),
        }
    }
}

impl<V: Clone> InMemoryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry directly, bypassing the write counter.
    pub fn insert(&self, key: &str, entry: CacheEntry<V>) {
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }

    /// Inspect an entry without counting it as a read.
    pub fn peek(&self, key: &str) -> Option<CacheEntry<V>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl<V> CacheStore<V> for InMemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>, CacheError> {
        *self.reads.lock().unwrap() += 1;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: V, stored_at_millis: i64) -> Result<(), CacheError> {
        *self.writes.lock().unwrap() += 1;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), CacheEntry::new(stored_at_millis, value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_overwrites_and_counts() {
        let cache = InMemoryCache::new();
        cache.set("k", 1u32, 10).await.unwrap();
        cache.set("k", 2u32, 20).await.unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.write_count(), 2);
        assert_eq!(cache.get("k").await.unwrap(), Some(CacheEntry::new(20, 2)));
        assert_eq!(cache.read_count(), 1);
    }

    #[test]
    fn test_insert_and_peek_do_not_count() {
        let cache = InMemoryCache::new();
        cache.insert("k", CacheEntry::new(5, "v"));
        assert_eq!(cache.peek("k"), Some(CacheEntry::new(5, "v")));
        assert_eq!(cache.read_count(), 0);
        assert_eq!(cache.write_count(), 0);
    }
}
