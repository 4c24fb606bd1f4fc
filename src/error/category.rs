//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling and display decisions.
///
/// None of these categories trigger automatic retries; a new attempt only
/// happens when the caller asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout failures talking to a remote API.
    Network,

    /// The remote API answered with a non-success status.
    Server,

    /// The unauthenticated API quota is used up.
    RateLimit,

    /// Requested content does not exist or could not be read.
    Content,

    /// Filesystem or OS errors (cache directory, data files).
    System,

    /// Invalid settings or input data.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Content => "content",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Server => "The API may be experiencing issues. Please try again later",
            ErrorCategory::RateLimit => {
                "Wait for the rolling 60-minute window to reset, or visit the profile directly"
            }
            ErrorCategory::Content => "Pick another entry or check the content directory",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your configuration and data files",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
