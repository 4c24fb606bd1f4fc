//! Error handling for folio.
//!
//! - **Error Categories**: coarse classification for display decisions
//! - **Domain-specific Errors**: network, content and cache errors
//! - **Unified Error Type**: [`FolioError`] for helpers and the CLI
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection or timeout talking to the API |
//! | Server | API answered with a non-success status |
//! | RateLimit | Unauthenticated quota exhausted |
//! | Content | Missing or unreadable content |
//! | System | Cache directory or data file IO |
//! | Configuration | Bad settings or data files |

mod category;
mod content;
mod folio_error;
mod network;
mod result;

pub use category::ErrorCategory;
pub use content::ContentError;
pub use folio_error::FolioError;
pub use network::{
    contains_rate_limit_marker, NetworkError, RATE_LIMIT_MARKER, RATE_LIMIT_MESSAGE,
};
pub use result::FolioResult;
pub use crate::traits::CacheError;
