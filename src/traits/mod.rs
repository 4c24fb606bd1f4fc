//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations against the stats API
//! - [`CacheStore`] - Timestamped key-value storage for fetched stats
//! - [`Clock`] - Current time in epoch milliseconds
//! - [`ContentProvider`] - Lookup of content units by canonical path

pub mod cache;
pub mod clock;
pub mod content;
pub mod http;

pub use cache::{CacheEntry, CacheError, CacheStore};
pub use clock::Clock;
pub use content::ContentProvider;
pub use http::{Headers, HttpClient, HttpError, Response};
