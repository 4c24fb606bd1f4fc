//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileCache`] - JSON-file cache under the platform cache directory
//! - [`SystemClock`] - Wall clock via chrono
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`mock::InMemoryCache`] - In-memory cache with write recording
//! - [`mock::ManualClock`] - Clock that only moves when told to

pub mod file_cache;
pub mod mock;
pub mod reqwest_http;
pub mod system_clock;

pub use file_cache::FileCache;
pub use mock::{InMemoryCache, ManualClock, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clock::SystemClock;
