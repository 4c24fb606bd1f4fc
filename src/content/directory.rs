//! Content provider backed by a directory of `.mdx` / `.md` files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::document::Content;
use super::key::ContentPath;
use crate::error::ContentError;
use crate::traits::ContentProvider;

/// Extensions tried in order for each path.
const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Loads `{root}/{path}.mdx`, falling back to `{root}/{path}.md`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate files for `path`, or `None` if the path tries to leave the root.
    fn candidates(&self, path: &ContentPath) -> Option<Vec<PathBuf>> {
        let mut base = self.root.clone();
        for segment in path.segments() {
            if segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains('\\')
                || Path::new(segment).is_absolute()
            {
                return None;
            }
            base.push(segment);
        }

        Some(
            EXTENSIONS
                .iter()
                .map(|ext| {
                    let mut file = base.clone().into_os_string();
                    file.push(".");
                    file.push(ext);
                    PathBuf::from(file)
                })
                .collect(),
        )
    }
}

#[async_trait]
impl ContentProvider for DirectoryProvider {
    async fn load(&self, path: &ContentPath) -> Result<Content, ContentError> {
        let candidates = self.candidates(path).ok_or_else(|| {
            tracing::warn!(path = %path, "rejected content path outside the content root");
            ContentError::not_found(path.as_str())
        })?;

        for file in candidates {
            match tokio::fs::read_to_string(&file).await {
                Ok(body) => {
                    tracing::debug!(path = %path, file = %file.display(), "loaded content file");
                    return Ok(Content::from_markdown(path.clone(), body));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(ContentError::Load {
                        path: path.to_string(),
                        message: format!("{}: {}", file.display(), e),
                    })
                }
            }
        }

        Err(ContentError::not_found(path.as_str()))
    }
}
