//! Classified stats failures, as shown in place of the profile summary.

use std::fmt;

use crate::error::{ErrorCategory, NetworkError};

/// The two failure classes the stats view distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Unauthenticated quota used up. Shown with a fixed explanation.
    RateLimitExceeded,
    /// Any other transport or server failure.
    Transport,
}

/// Classified failure shown in place of the stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsFailure {
    pub kind: FailureKind,
    pub message: String,
    /// HTTP status when the server answered at all
    pub status: Option<u16>,
}

impl StatsFailure {
    pub fn is_rate_limited(&self) -> bool {
        self.kind == FailureKind::RateLimitExceeded
    }

    /// Server errors carry the status they were answered with.
    pub fn category(&self) -> ErrorCategory {
        match (self.kind, self.status) {
            (FailureKind::RateLimitExceeded, _) => ErrorCategory::RateLimit,
            (FailureKind::Transport, Some(_)) => ErrorCategory::Server,
            (FailureKind::Transport, None) => ErrorCategory::Network,
        }
    }

    /// What the user can do about it.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl From<&NetworkError> for StatsFailure {
    fn from(err: &NetworkError) -> Self {
        let kind = if err.is_rate_limited() {
            FailureKind::RateLimitExceeded
        } else {
            FailureKind::Transport
        };
        let status = match err {
            NetworkError::HttpStatus { status, .. } => Some(*status),
            NetworkError::RateLimited => Some(403),
            _ => None,
        };
        Self {
            kind,
            message: err.user_message(),
            status,
        }
    }
}

impl From<NetworkError> for StatsFailure {
    fn from(err: NetworkError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for StatsFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
