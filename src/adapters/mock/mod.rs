//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, enabling unit tests without
//! network access, a real cache directory, or a moving clock.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryCache`] - Cache with read/write counters
//! - [`ManualClock`] - Clock that only moves when advanced

pub mod cache;
pub mod clock;
pub mod http;

pub use cache::InMemoryCache;
pub use clock::ManualClock;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
