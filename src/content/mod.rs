//! Navigation-driven content lookup.
//!
//! A menu selection becomes a [`ContentKey`], the key routes to a
//! [`ContentPath`], and the [`ContentResolver`] loads it through a
//! [`ContentProvider`](crate::traits::ContentProvider), falling back to a
//! shared error page when the path has no content.

mod directory;
mod document;
mod key;
mod registry;
mod resolver;
mod slug;

pub use directory::DirectoryProvider;
pub use document::Content;
pub use key::{Category, ContentKey, ContentPath, ContentRoute, TabMapping, HOME_IDENTIFIER};
pub use registry::ContentRegistry;
pub use resolver::{ActiveContent, ContentResolver, Resolution, DEFAULT_FALLBACK_PATH};
pub use slug::slugify;
