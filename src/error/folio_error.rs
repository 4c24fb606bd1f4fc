//! Unified error type for the folio crate.

use std::fmt;
use std::path::PathBuf;

use super::category::ErrorCategory;

/// Unified error type.
///
/// The content resolver and stats service never hand errors to a view; they
/// convert failures into typed results at their own boundary. `FolioError`
/// is what library helpers and the CLI propagate with `?`.
#[derive(Debug)]
pub enum FolioError {
    /// Reading a data file failed.
    Io { path: PathBuf, source: std::io::Error },

    /// A data file did not match the expected JSON shape.
    InvalidData {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Invalid configuration or command-line input.
    Config { message: String },
}

impl FolioError {
    pub fn config(message: impl Into<String>) -> Self {
        FolioError::Config {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Io { .. } => ErrorCategory::System,
            FolioError::InvalidData { .. } | FolioError::Config { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Io { .. } => "E_SYS_IO",
            FolioError::InvalidData { .. } => "E_CFG_DATA",
            FolioError::Config { .. } => "E_CFG",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            FolioError::InvalidData { path, source } => {
                write!(f, "Invalid data in '{}': {}", path.display(), source)
            }
            FolioError::Config { message } => write!(f, "Configuration error: {}", message),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Io { source, .. } => Some(source),
            FolioError::InvalidData { source, .. } => Some(source),
            FolioError::Config { .. } => None,
        }
    }
}
