//! Process setup shared by the CLI commands.
//!
//! - [`config`] - [`FolioConfig`] defaults and environment overrides
//! - [`logging`] - `tracing` subscriber initialisation

pub mod config;
pub mod logging;

pub use config::FolioConfig;
pub use logging::init_tracing;
