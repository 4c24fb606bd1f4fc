//! GitHub profile statistics with a time-bounded cache.
//!
//! The unauthenticated GitHub API allows only a handful of requests per
//! hour per IP, so results are cached under `github_stats_<login>` and
//! served from there while fresh.
//!
//! - [`models`] - wire types and the derived [`ProfileStats`]
//! - [`derive`] - star totals, language histogram, commit estimate
//! - [`state`] - the pure loading state machine
//! - [`github`] - the two REST calls
//! - [`service`] - cache-first orchestration and background handles

pub mod derive;
pub mod failure;
pub mod github;
pub mod models;
pub mod service;
pub mod state;

pub use derive::{derive_stats, language_histogram, COMMITS_PER_REPOSITORY, TOP_LANGUAGES};
pub use failure::{FailureKind, StatsFailure};
pub use github::{GitHubApi, DEFAULT_API_BASE_URL, DEFAULT_PER_PAGE};
pub use models::{LanguageCount, ProfileInfo, ProfileStats, RepositoryInfo};
pub use service::{cache_key, LoadOptions, StatsHandle, StatsService, DEFAULT_FRESHNESS_WINDOW};
pub use state::{reduce, FetchStage, StatsEvent, StatsState, StatsView};
