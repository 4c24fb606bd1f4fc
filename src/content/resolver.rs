//! Navigation-to-content resolution with a single shared fallback.
//!
//! A resolution always settles on exactly one [`ActiveContent`]: the
//! requested unit, the shared fallback unit, the profile view, or empty.
//! Failures are logged and reported in the [`Resolution`], never returned
//! as errors.
//!
//! Overlapping resolutions are ordered by when they started: a resolution
//! that settles after a newer one has already been applied is discarded.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::document::Content;
use super::key::{ContentKey, ContentPath, ContentRoute, TabMapping};
use crate::error::ContentError;
use crate::traits::ContentProvider;

/// Default path of the shared fallback unit.
pub const DEFAULT_FALLBACK_PATH: &str = "error";

/// What the view should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveContent {
    /// Nothing selected, or nothing could be loaded.
    #[default]
    Empty,
    /// The home sentinel: show the profile view.
    Profile,
    /// The requested unit.
    Loaded(Content),
    /// The shared fallback unit, shown because `requested` was missing.
    Fallback {
        requested: ContentPath,
        content: Content,
    },
}

impl ActiveContent {
    pub fn content(&self) -> Option<&Content> {
        match self {
            ActiveContent::Loaded(content) | ActiveContent::Fallback { content, .. } => {
                Some(content)
            }
            ActiveContent::Empty | ActiveContent::Profile => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ActiveContent::Fallback { .. })
    }
}

/// Outcome of one [`ContentResolver::resolve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Start order of this request; higher is newer.
    pub ticket: u64,
    /// Where the key routed to.
    pub route: ContentRoute,
    /// What this request settled on.
    pub content: ActiveContent,
    /// False if a newer request had already been applied when this one settled.
    pub applied: bool,
    /// Set when both the requested unit and the fallback failed to load.
    pub degraded: Option<ContentError>,
}

#[derive(Debug, Default)]
struct ResolverState {
    next_ticket: u64,
    applied_ticket: u64,
    active: ActiveContent,
}

/// Resolves [`ContentKey`]s against a [`ContentProvider`].
pub struct ContentResolver {
    provider: Arc<dyn ContentProvider>,
    tabs: TabMapping,
    fallback: ContentPath,
    state: Mutex<ResolverState>,
}

impl ContentResolver {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            tabs: TabMapping::standard(),
            fallback: ContentPath::new(DEFAULT_FALLBACK_PATH),
            state: Mutex::new(ResolverState::default()),
        }
    }

    pub fn with_tabs(mut self, tabs: TabMapping) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<ContentPath>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn fallback_path(&self) -> &ContentPath {
        &self.fallback
    }

    /// Snapshot of the content currently applied.
    pub async fn active(&self) -> ActiveContent {
        self.state.lock().await.active.clone()
    }

    /// Resolve `key` and apply the result unless a newer request beat it.
    pub async fn resolve(&self, key: &ContentKey) -> Resolution {
        let ticket = {
            let mut state = self.state.lock().await;
            state.next_ticket += 1;
            state.next_ticket
        };

        let route = key.route(&self.tabs);
        tracing::debug!(ticket, category = %key.category, identifier = %key.identifier, ?route, "resolving content");

        let (content, degraded) = match &route {
            ContentRoute::Home => (ActiveContent::Profile, None),
            ContentRoute::Module(path) => self.load_with_fallback(path).await,
        };

        let applied = {
            let mut state = self.state.lock().await;
            if ticket > state.applied_ticket {
                state.applied_ticket = ticket;
                state.active = content.clone();
                true
            } else {
                tracing::debug!(
                    ticket,
                    newer = state.applied_ticket,
                    "discarding stale content resolution"
                );
                false
            }
        };

        Resolution {
            ticket,
            route,
            content,
            applied,
            degraded,
        }
    }

    async fn load_with_fallback(&self, path: &ContentPath) -> (ActiveContent, Option<ContentError>) {
        let miss = match self.provider.load(path).await {
            Ok(content) => return (ActiveContent::Loaded(content), None),
            Err(err) => err,
        };

        tracing::warn!(path = %path, code = miss.error_code(), error = %miss, "content unavailable, loading fallback");

        // A missing fallback is not retried as its own fallback.
        if path == &self.fallback {
            tracing::error!(path = %path, "fallback content failed to load");
            return (ActiveContent::Empty, Some(miss));
        }

        match self.provider.load(&self.fallback).await {
            Ok(content) => (
                ActiveContent::Fallback {
                    requested: path.clone(),
                    content,
                },
                None,
            ),
            Err(err) => {
                tracing::error!(
                    path = %path,
                    fallback = %self.fallback,
                    error = %err,
                    "fallback content failed to load"
                );
                (ActiveContent::Empty, Some(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, ContentRegistry};
    use async_trait::async_trait;
    use std::time::Duration;

    fn registry() -> ContentRegistry {
        ContentRegistry::new()
            .with_markdown("skills/php", "# PHP")
            .with_markdown("skills/linux", "# Linux")
            .with_markdown("error", "# Not found")
    }

    fn resolver(registry: ContentRegistry) -> ContentResolver {
        ContentResolver::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_existing_content_is_loaded() {
        let resolver = resolver(registry());
        let resolution = resolver.resolve(&ContentKey::new(Category::Skills, "PHP")).await;

        assert!(resolution.applied);
        assert!(resolution.degraded.is_none());
        let content = resolution.content.content().unwrap();
        assert_eq!(content.title(), Some("PHP"));
        assert_eq!(resolver.active().await, resolution.content);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let resolver = resolver(registry());
        let key = ContentKey::new(Category::Skills, "Linux");
        let first = resolver.resolve(&key).await;
        let second = resolver.resolve(&key).await;
        assert_eq!(first.content, second.content);
    }

    #[tokio::test]
    async fn test_missing_content_uses_fallback() {
        let resolver = resolver(registry());
        let resolution = resolver
            .resolve(&ContentKey::new(Category::Skills, "Docker"))
            .await;

        match &resolution.content {
            ActiveContent::Fallback { requested, content } => {
                assert_eq!(requested.as_str(), "skills/docker");
                assert_eq!(content.path().as_str(), "error");
            }
            other => panic!("expected fallback, got {:?}", other),
        }
        assert!(resolution.degraded.is_none());
    }

    #[tokio::test]
    async fn test_missing_fallback_is_empty_and_degraded() {
        let resolver = resolver(ContentRegistry::new().with_markdown("skills/php", "# PHP"));
        let resolution = resolver
            .resolve(&ContentKey::new(Category::Skills, "Docker"))
            .await;

        assert_eq!(resolution.content, ActiveContent::Empty);
        assert_eq!(resolution.degraded, Some(ContentError::not_found("error")));
        assert_eq!(resolver.active().await, ActiveContent::Empty);
    }

    #[tokio::test]
    async fn test_home_sentinel_loads_nothing() {
        let resolver = resolver(ContentRegistry::new());
        let resolution = resolver.resolve(&ContentKey::home()).await;
        assert_eq!(resolution.route, ContentRoute::Home);
        assert_eq!(resolution.content, ActiveContent::Profile);
    }

    #[tokio::test]
    async fn test_new_resolution_replaces_previous() {
        let resolver = resolver(registry());
        resolver.resolve(&ContentKey::new(Category::Skills, "PHP")).await;
        resolver.resolve(&ContentKey::new(Category::Skills, "Linux")).await;

        let active = resolver.active().await;
        assert_eq!(active.content().and_then(Content::title), Some("Linux"));
    }

    #[tokio::test]
    async fn test_custom_fallback_path() {
        let registry = ContentRegistry::new().with_markdown("home/missing", "# Gone");
        let resolver = resolver(registry).with_fallback("home/missing");
        let resolution = resolver
            .resolve(&ContentKey::new(Category::Projects, "Nope"))
            .await;
        assert!(resolution.content.is_fallback());
    }

    /// Provider where `skills/slow` takes longer than everything else.
    struct SlowProvider {
        inner: ContentRegistry,
    }

    #[async_trait]
    impl ContentProvider for SlowProvider {
        async fn load(&self, path: &ContentPath) -> Result<Content, ContentError> {
            if path.as_str() == "skills/slow" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            self.inner.load(path).await
        }
    }

    #[tokio::test]
    async fn test_stale_resolution_is_discarded() {
        let provider = SlowProvider {
            inner: ContentRegistry::new()
                .with_markdown("skills/slow", "# Slow")
                .with_markdown("skills/fast", "# Fast"),
        };
        let resolver = ContentResolver::new(Arc::new(provider));

        let slow_key = ContentKey::new(Category::Skills, "Slow");
        let fast_key = ContentKey::new(Category::Skills, "Fast");
        let slow = resolver.resolve(&slow_key);
        let fast = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            resolver.resolve(&fast_key).await
        };
        let (slow, fast) = tokio::join!(slow, fast);

        assert!(slow.ticket < fast.ticket);
        assert!(fast.applied);
        assert!(!slow.applied);
        assert_eq!(
            resolver.active().await.content().and_then(Content::title),
            Some("Fast")
        );
    }
}
