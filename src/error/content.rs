//! Content lookup errors.

/// Failure to produce a content unit for a path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Nothing exists at the requested path.
    #[error("content not found: {path}")]
    NotFound { path: String },

    /// The path exists but could not be read.
    #[error("failed to load content '{path}': {message}")]
    Load { path: String, message: String },
}

impl ContentError {
    pub fn not_found(path: impl Into<String>) -> Self {
        ContentError::NotFound { path: path.into() }
    }

    pub fn path(&self) -> &str {
        match self {
            ContentError::NotFound { path } | ContentError::Load { path, .. } => path,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::NotFound { .. } => "E_CONTENT_MISSING",
            ContentError::Load { .. } => "E_CONTENT_LOAD",
        }
    }
}
