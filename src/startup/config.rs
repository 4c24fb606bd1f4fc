//! Runtime configuration.
//!
//! Defaults suit the public GitHub API and a `./content` directory next to
//! the binary; every path and the freshness window can be overridden from
//! the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::content::{TabMapping, DEFAULT_FALLBACK_PATH};
use crate::stats::{DEFAULT_API_BASE_URL, DEFAULT_FRESHNESS_WINDOW, DEFAULT_PER_PAGE};

pub const ENV_API_BASE_URL: &str = "FOLIO_GITHUB_API";
pub const ENV_CONTENT_DIR: &str = "FOLIO_CONTENT_DIR";
pub const ENV_CACHE_DIR: &str = "FOLIO_CACHE_DIR";
pub const ENV_CACHE_TTL_SECS: &str = "FOLIO_CACHE_TTL_SECS";

/// Used when the platform has no cache directory.
const LOCAL_CACHE_DIR: &str = ".folio-cache";

/// Configuration shared by the CLI commands.
///
/// # Example
///
/// ```ignore
/// use folio::startup::FolioConfig;
///
/// let config = FolioConfig::default()
///     .with_content_dir("site/content")
///     .with_freshness_window(Duration::from_secs(600));
/// ```
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// GitHub REST base URL, without trailing slash
    pub api_base_url: String,
    /// Root of the `.mdx`/`.md` content tree
    pub content_dir: PathBuf,
    /// Where cached stats are written
    pub cache_dir: PathBuf,
    /// Maximum age of a cache entry that is still served
    pub freshness_window: Duration,
    /// Page size of the repository listing
    pub per_page: u32,
    pub user_agent: String,
    /// Content shown when the requested unit is missing
    pub fallback_path: String,
    /// Menu tabs that route into a subcategory folder
    pub tab_subcategories: TabMapping,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            content_dir: PathBuf::from("content"),
            cache_dir: crate::adapters::FileCache::<()>::default_dir()
                .unwrap_or_else(|| PathBuf::from(LOCAL_CACHE_DIR)),
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
            per_page: DEFAULT_PER_PAGE,
            user_agent: format!("folio/{}", env!("CARGO_PKG_VERSION")),
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
            tab_subcategories: TabMapping::standard(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    pub fn with_tab_subcategories(mut self, tabs: TabMapping) -> Self {
        self.tab_subcategories = tabs;
        self
    }

    /// Defaults overridden by `FOLIO_*` environment variables.
    ///
    /// Empty or unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_API_BASE_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(dir) = env_value(ENV_CONTENT_DIR) {
            config = config.with_content_dir(dir);
        }
        if let Some(dir) = env_value(ENV_CACHE_DIR) {
            config = config.with_cache_dir(dir);
        }
        if let Some(raw) = env_value(ENV_CACHE_TTL_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => config = config.with_freshness_window(Duration::from_secs(secs)),
                Err(e) => tracing::warn!(
                    var = ENV_CACHE_TTL_SECS,
                    value = %raw,
                    error = %e,
                    "ignoring invalid cache TTL"
                ),
            }
        }

        config
    }
}

fn env_value(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(e) => {
            tracing::warn!(var = name, error = %e, "ignoring unreadable environment variable");
            None
        }
    }
}
