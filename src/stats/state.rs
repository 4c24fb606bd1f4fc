//! Stats loading as a pure state machine.
//!
//! ```text
//! Idle -> CacheCheck -> Ready                              (fresh hit)
//!                    -> Fetching(Profile)
//!                         -> Fetching(Repositories)
//!                              -> Deriving -> Ready
//!                         -> Error
//! ```
//!
//! [`reduce`] performs no IO. The service feeds it events as its awaits
//! complete, and the view only ever sees the three-way [`StatsView`].

use super::derive::derive_stats;
use super::failure::StatsFailure;
use super::models::{ProfileInfo, ProfileStats, RepositoryInfo};

/// Which of the two sequential requests is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStage {
    Profile,
    /// The profile arrived; waiting for the repository list.
    Repositories { profile: ProfileInfo },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatsState {
    #[default]
    Idle,
    CacheCheck,
    Fetching(FetchStage),
    Deriving {
        profile: ProfileInfo,
        repositories: Vec<RepositoryInfo>,
    },
    Ready(ProfileStats),
    Error(StatsFailure),
}

impl StatsState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StatsState::Ready(_) | StatsState::Error(_))
    }

    pub fn view(&self) -> StatsView {
        match self {
            StatsState::Ready(stats) => StatsView::Ready(stats.clone()),
            StatsState::Error(failure) => StatsView::Error(failure.clone()),
            _ => StatsView::Loading,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StatsState::Idle => "idle",
            StatsState::CacheCheck => "cache_check",
            StatsState::Fetching(FetchStage::Profile) => "fetching_profile",
            StatsState::Fetching(FetchStage::Repositories { .. }) => "fetching_repositories",
            StatsState::Deriving { .. } => "deriving",
            StatsState::Ready(_) => "ready",
            StatsState::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsEvent {
    /// View mounted: consult the cache first.
    Mount,
    /// Explicit reload: go straight to the network.
    Reload,
    CacheHit(ProfileStats),
    /// No entry, a stale entry, or an unreadable one.
    CacheMiss,
    ProfileFetched(ProfileInfo),
    RepositoriesFetched(Vec<RepositoryInfo>),
    FetchFailed(StatsFailure),
    /// Compute metrics from the fetched data.
    Derive,
}

impl StatsEvent {
    fn name(&self) -> &'static str {
        match self {
            StatsEvent::Mount => "mount",
            StatsEvent::Reload => "reload",
            StatsEvent::CacheHit(_) => "cache_hit",
            StatsEvent::CacheMiss => "cache_miss",
            StatsEvent::ProfileFetched(_) => "profile_fetched",
            StatsEvent::RepositoriesFetched(_) => "repositories_fetched",
            StatsEvent::FetchFailed(_) => "fetch_failed",
            StatsEvent::Derive => "derive",
        }
    }
}

/// The only shapes a view ever observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsView {
    Loading,
    Ready(ProfileStats),
    Error(StatsFailure),
}

impl StatsView {
    pub fn is_loading(&self) -> bool {
        matches!(self, StatsView::Loading)
    }
}

/// Apply `event` to `state`.
///
/// Events that do not apply to the current state leave it unchanged.
pub fn reduce(state: StatsState, event: StatsEvent) -> StatsState {
    use StatsEvent as E;
    use StatsState as S;

    match (state, event) {
        // Remounting or reloading restarts from any settled state.
        (S::Idle | S::Ready(_) | S::Error(_), E::Mount) => S::CacheCheck,
        (S::Idle | S::Ready(_) | S::Error(_), E::Reload) => S::Fetching(FetchStage::Profile),

        (S::CacheCheck, E::CacheHit(stats)) => S::Ready(stats),
        (S::CacheCheck, E::CacheMiss) => S::Fetching(FetchStage::Profile),

        (S::Fetching(FetchStage::Profile), E::ProfileFetched(profile)) => {
            S::Fetching(FetchStage::Repositories { profile })
        }
        (S::Fetching(FetchStage::Repositories { profile }), E::RepositoriesFetched(repositories)) => {
            S::Deriving {
                profile,
                repositories,
            }
        }
        (S::Fetching(_), E::FetchFailed(failure)) => S::Error(failure),

        (
            S::Deriving {
                profile,
                repositories,
            },
            E::Derive,
        ) => S::Ready(derive_stats(profile, repositories)),

        (state, event) => {
            tracing::trace!(state = state.name(), event = event.name(), "ignored stats event");
            state
        }
    }
}
