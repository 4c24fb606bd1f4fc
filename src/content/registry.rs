//! In-memory content registry.
//!
//! An explicit mapping from canonical paths to content factories, used for
//! content compiled into the binary and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::document::Content;
use super::key::ContentPath;
use crate::error::ContentError;
use crate::traits::ContentProvider;

type Factory = Arc<dyn Fn(&ContentPath) -> Result<Content, ContentError> + Send + Sync>;

/// Registry of content factories keyed by canonical path.
#[derive(Clone, Default)]
pub struct ContentRegistry {
    factories: HashMap<String, Factory>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `path`, replacing any previous one.
    pub fn register<F>(&mut self, path: impl Into<ContentPath>, factory: F)
    where
        F: Fn(&ContentPath) -> Result<Content, ContentError> + Send + Sync + 'static,
    {
        let path = path.into();
        self.factories
            .insert(path.as_str().to_string(), Arc::new(factory));
    }

    /// Register a static Markdown body for `path`.
    pub fn register_markdown(&mut self, path: impl Into<ContentPath>, body: &str) {
        let body: Arc<str> = Arc::from(body);
        self.register(path, move |path| {
            Ok(Content::from_markdown(path.clone(), body.clone()))
        });
    }

    /// Builder form of [`register_markdown`](Self::register_markdown).
    pub fn with_markdown(mut self, path: &str, body: &str) -> Self {
        self.register_markdown(path, body);
        self
    }

    pub fn contains(&self, path: &ContentPath) -> bool {
        self.factories.contains_key(path.as_str())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("paths", &self.paths())
            .finish()
    }
}

#[async_trait]
impl ContentProvider for ContentRegistry {
    async fn load(&self, path: &ContentPath) -> Result<Content, ContentError> {
        match self.factories.get(path.as_str()) {
            Some(factory) => factory(path),
            None => Err(ContentError::not_found(path.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_markdown_loads() {
        let registry = ContentRegistry::new().with_markdown("skills/docker", "# Docker");
        let content = registry.load(&"skills/docker".into()).await.unwrap();
        assert_eq!(content.title(), Some("Docker"));
    }

    #[tokio::test]
    async fn test_unregistered_path_is_not_found() {
        let registry = ContentRegistry::new();
        let err = registry.load(&"skills/docker".into()).await.unwrap_err();
        assert_eq!(err, ContentError::not_found("skills/docker"));
    }

    #[tokio::test]
    async fn test_failing_factory_propagates() {
        let mut registry = ContentRegistry::new();
        registry.register("error", |path| {
            Err(ContentError::Load {
                path: path.to_string(),
                message: "broken".to_string(),
            })
        });
        let err = registry.load(&"error".into()).await.unwrap_err();
        assert!(matches!(err, ContentError::Load { .. }));
    }

    #[test]
    fn test_paths_sorted() {
        let registry = ContentRegistry::new()
            .with_markdown("skills/php", "")
            .with_markdown("error", "")
            .with_markdown("projects/folio", "");
        assert_eq!(registry.paths(), vec!["error", "projects/folio", "skills/php"]);
        assert!(registry.contains(&"error".into()));
        assert_eq!(registry.len(), 3);
    }
}
