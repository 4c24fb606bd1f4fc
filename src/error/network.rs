//! Network-related error types.
//!
//! Errors that occur while talking to the profile statistics API,
//! including the classification of GitHub's unauthenticated rate limit.

use std::fmt;

use crate::traits::{HttpError, Response};

/// Text GitHub puts in the body (and sometimes the error message) once the
/// unauthenticated quota is used up.
pub const RATE_LIMIT_MARKER: &str = "API rate limit exceeded";

/// Fixed user-facing explanation shown for the rate-limit variant.
pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded for your IP address. (But here's the good news: Authenticated requests get a higher rate limit. Check out the documentation for more details.)";

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out in the transport.
    Timeout { url: String, message: String },

    /// HTTP status error (non-2xx response that is not a rate limit).
    HttpStatus { status: u16, reason: String },

    /// The unauthenticated rate limit was hit.
    RateLimited,

    /// Response body did not have the expected shape.
    InvalidResponse { message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

/// True if `text` carries GitHub's rate-limit marker.
pub fn contains_rate_limit_marker(text: &str) -> bool {
    text.contains(RATE_LIMIT_MARKER)
}

impl NetworkError {
    /// Classify a non-success response.
    ///
    /// Only a 403 whose body carries [`RATE_LIMIT_MARKER`] is a rate limit;
    /// everything else is an `HttpStatus` error.
    pub fn from_response(response: &Response) -> Self {
        if response.status == 403 && contains_rate_limit_marker(&response.text_lossy()) {
            return NetworkError::RateLimited;
        }
        NetworkError::HttpStatus {
            status: response.status,
            reason: response.reason().to_string(),
        }
    }

    /// Classify a transport failure for `url`.
    ///
    /// A transport message that itself mentions the rate limit is
    /// reclassified as [`NetworkError::RateLimited`].
    pub fn from_transport(err: &HttpError, url: &str) -> Self {
        if contains_rate_limit_marker(err.message()) {
            return NetworkError::RateLimited;
        }
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message: message.clone(),
            },
            HttpError::Timeout(message) => NetworkError::Timeout {
                url: url.to_string(),
                message: message.clone(),
            },
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(message) | HttpError::Other(message) => NetworkError::Other {
                message: message.clone(),
            },
        }
    }

    /// Classify a body that failed to decode.
    pub fn from_decode(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        if contains_rate_limit_marker(&message) {
            return NetworkError::RateLimited;
        }
        NetworkError::InvalidResponse { message }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, NetworkError::RateLimited)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            NetworkError::HttpStatus { status, reason } => {
                format!("GitHub API error: {} {}", status, reason)
                    .trim_end()
                    .to_string()
            }
            NetworkError::ConnectionFailed { message, .. }
            | NetworkError::Timeout { message, .. }
            | NetworkError::InvalidResponse { message }
            | NetworkError::Other { message } => message.clone(),
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::HttpStatus { status, reason } => {
                write!(f, "HTTP {} error: {}", status, reason)
            }
            NetworkError::RateLimited => write!(f, "Rate limited: {}", RATE_LIMIT_MARKER),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_403_with_marker_is_rate_limited() {
        let response = Response::new(
            403,
            r#"{"message":"API rate limit exceeded for 1.2.3.4.","documentation_url":"..."}"#,
        );
        assert_eq!(NetworkError::from_response(&response), NetworkError::RateLimited);
    }

    #[test]
    fn test_403_without_marker_is_http_status() {
        let response = Response::new(403, r#"{"message":"Repository access blocked"}"#);
        assert_eq!(
            NetworkError::from_response(&response),
            NetworkError::HttpStatus {
                status: 403,
                reason: "Forbidden".to_string()
            }
        );
    }

    #[test]
    fn test_marker_on_other_status_is_not_rate_limited() {
        let response = Response::new(429, "API rate limit exceeded");
        assert!(!NetworkError::from_response(&response).is_rate_limited());
    }

    #[test]
    fn test_transport_error_with_marker_is_reclassified() {
        let err = HttpError::Other("API rate limit exceeded upstream".to_string());
        assert!(NetworkError::from_transport(&err, "https://api.github.com").is_rate_limited());
    }

    #[test]
    fn test_transport_error_keeps_message() {
        let err = HttpError::ConnectionFailed("connection refused".to_string());
        let classified = NetworkError::from_transport(&err, "https://api.github.com/users/x");
        assert_eq!(classified.user_message(), "connection refused");
        assert_eq!(classified.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_http_status_user_message() {
        let err = NetworkError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.user_message(), "GitHub API error: 404 Not Found");

        let unknown = NetworkError::HttpStatus {
            status: 599,
            reason: String::new(),
        };
        assert_eq!(unknown.user_message(), "GitHub API error: 599");
    }

    #[test]
    fn test_rate_limit_user_message_is_fixed() {
        assert_eq!(NetworkError::RateLimited.user_message(), RATE_LIMIT_MESSAGE);
    }
}
