//! folio - content resolution, cached GitHub stats and CV data for a
//! portfolio site.
//!
//! This library exposes modules for use by the CLI and integration tests.

pub mod adapters;
pub mod cli;
pub mod content;
pub mod cv;
pub mod error;
pub mod startup;
pub mod stats;
pub mod traits;
