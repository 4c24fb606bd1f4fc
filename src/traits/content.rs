//! Content provider trait abstraction.
//!
//! A provider maps a canonical content path (`skills/docker`,
//! `experiences/php/acme`, `error`) to a loaded [`Content`] unit. It replaces
//! runtime module-path imports with an explicit lookup that either yields
//! content or a typed miss.

use async_trait::async_trait;

use crate::content::{Content, ContentPath};
use crate::error::ContentError;

/// Trait for content lookup.
///
/// # Example
///
/// ```ignore
/// use folio::traits::ContentProvider;
///
/// async fn title_of<P: ContentProvider>(provider: &P, path: &ContentPath) -> Option<String> {
///     provider.load(path).await.ok().and_then(|c| c.title().map(str::to_owned))
/// }
/// ```
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Load the content stored at `path`.
    ///
    /// # Returns
    /// - `Ok(content)` if the path resolves
    /// - `Err(ContentError::NotFound)` if nothing exists at the path
    /// - `Err(ContentError::Load)` if the path exists but could not be read
    async fn load(&self, path: &ContentPath) -> Result<Content, ContentError>;
}
