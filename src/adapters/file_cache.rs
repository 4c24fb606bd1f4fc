//! File-backed cache adapter.
//!
//! One JSON file per key under a cache directory, each holding a
//! `{"timestamp": ..., "data": ...}` envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::traits::{CacheEntry, CacheError, CacheStore};

/// Directory name used under the platform cache directory.
const CACHE_DIR_NAME: &str = "folio";

/// Cache storing each entry as `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileCache<V> {
    dir: PathBuf,
    _value: PhantomData<fn() -> V>,
}

impl<V> FileCache<V> {
    /// Create a cache rooted at `dir`. The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            _value: PhantomData,
        }
    }

    /// Default location: `<platform cache dir>/folio`.
    ///
    /// Returns `None` if the platform cache directory cannot be determined.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Characters outside `[A-Za-z0-9_.-]` are replaced so a key can never
    /// escape the cache directory.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let file_stem = if file_stem.is_empty() || file_stem.chars().all(|c| c == '.') {
            "_".to_string()
        } else {
            file_stem
        };
        self.dir.join(format!("{}.json", file_stem))
    }
}

#[async_trait]
impl<V> CacheStore<V> for FileCache<V>
where
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>, CacheError> {
        let path = self.entry_path(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| CacheError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    async fn set(&self, key: &str, value: V, stored_at_millis: i64) -> Result<(), CacheError> {
        let io_err = |source| CacheError::Io {
            key: key.to_string(),
            source,
        };

        let entry = CacheEntry::new(stored_at_millis, value);
        let encoded =
            serde_json::to_vec_pretty(&entry).map_err(|source| CacheError::Serialization {
                key: key.to_string(),
                source,
            })?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        tokio::fs::write(self.entry_path(key), encoded)
            .await
            .map_err(io_err)
    }
}
