//! Cache-first loading of profile statistics.
//!
//! [`StatsService`] drives the [`reduce`] state machine against the
//! injected cache, clock and HTTP client. A fresh cache entry is served
//! without touching the network; otherwise the profile and repository
//! requests run one after the other and a successful result overwrites
//! the cache entry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::failure::{FailureKind, StatsFailure};
use super::github::GitHubApi;
use super::models::ProfileStats;
use super::state::{reduce, StatsEvent, StatsState, StatsView};
use crate::startup::FolioConfig;
use crate::traits::{CacheStore, Clock, HttpClient};

/// How long a cached result is served before refetching.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(60 * 60);

const CACHE_KEY_PREFIX: &str = "github_stats_";

/// Cache key for a profile identifier.
pub fn cache_key(identifier: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, identifier)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip the cache read and go straight to the network.
    pub refresh: bool,
}

impl LoadOptions {
    pub fn refresh() -> Self {
        Self { refresh: true }
    }
}

pub struct StatsService {
    api: GitHubApi,
    cache: Arc<dyn CacheStore<ProfileStats>>,
    clock: Arc<dyn Clock>,
    window: Duration,
}

impl StatsService {
    pub fn new(
        http: Arc<dyn HttpClient>,
        cache: Arc<dyn CacheStore<ProfileStats>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api: GitHubApi::new(http),
            cache,
            clock,
            window: DEFAULT_FRESHNESS_WINDOW,
        }
    }

    pub fn from_config(
        http: Arc<dyn HttpClient>,
        cache: Arc<dyn CacheStore<ProfileStats>>,
        clock: Arc<dyn Clock>,
        config: &FolioConfig,
    ) -> Self {
        let api = GitHubApi::new(http)
            .with_base_url(config.api_base_url.clone())
            .with_user_agent(config.user_agent.clone())
            .with_per_page(config.per_page);
        Self {
            api,
            cache,
            clock,
            window: config.freshness_window,
        }
    }

    pub fn with_api(mut self, api: GitHubApi) -> Self {
        self.api = api;
        self
    }

    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn api(&self) -> &GitHubApi {
        &self.api
    }

    pub fn freshness_window(&self) -> Duration {
        self.window
    }

    /// Load stats for `identifier` and return the settled view.
    pub async fn load(&self, identifier: &str, options: LoadOptions) -> StatsView {
        let mounted = AtomicBool::new(true);
        let mut session = Session::new(identifier, &mounted, None);
        self.run(&mut session, options).await
    }

    /// Load in the background, streaming view changes to the returned handle.
    ///
    /// Once the handle is unmounted (or dropped) the load publishes nothing
    /// further and does not write the cache.
    pub fn spawn(self: &Arc<Self>, identifier: impl Into<String>, options: LoadOptions) -> StatsHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let mounted = Arc::new(AtomicBool::new(true));

        let service = Arc::clone(self);
        let flag = Arc::clone(&mounted);
        let identifier = identifier.into();
        let task = tokio::spawn(async move {
            let mut session = Session::new(&identifier, &flag, Some(&tx));
            service.run(&mut session, options).await
        });

        StatsHandle {
            mounted,
            updates: rx,
            task,
        }
    }

    async fn run(&self, session: &mut Session<'_>, options: LoadOptions) -> StatsView {
        let identifier = session.identifier;

        let start = if options.refresh {
            StatsEvent::Reload
        } else {
            StatsEvent::Mount
        };
        if !session.apply(start) {
            return session.view();
        }

        if !options.refresh {
            let event = match self.read_cache(identifier).await {
                Some(stats) => StatsEvent::CacheHit(stats),
                None => StatsEvent::CacheMiss,
            };
            if !session.apply(event) || session.state.is_terminal() {
                return session.view();
            }
        }

        tracing::info!(identifier, "fetching GitHub stats");

        let event = match self.api.fetch_profile(identifier).await {
            Ok(profile) => StatsEvent::ProfileFetched(profile),
            Err(e) => StatsEvent::FetchFailed(StatsFailure::from(e)),
        };
        if !session.apply(event) || session.state.is_terminal() {
            return session.view();
        }

        let event = match self.api.fetch_repositories(identifier).await {
            Ok(repositories) => StatsEvent::RepositoriesFetched(repositories),
            Err(e) => StatsEvent::FetchFailed(StatsFailure::from(e)),
        };
        if !session.apply(event) || session.state.is_terminal() {
            return session.view();
        }

        // Cache before publishing Ready.
        if !session.advance(StatsEvent::Derive) {
            return session.view();
        }
        if let StatsState::Ready(stats) = &session.state {
            self.write_cache(identifier, stats).await;
        }
        session.publish();
        session.view()
    }

    async fn read_cache(&self, identifier: &str) -> Option<ProfileStats> {
        let key = cache_key(identifier);
        let entry = match self.cache.get(&key).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                tracing::debug!(key = %key, "stats cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "unreadable stats cache entry, refetching");
                return None;
            }
        };

        let now = self.clock.now_millis();
        if entry.is_fresh(now, self.window) {
            tracing::info!(key = %key, age_ms = entry.age_millis(now), "serving cached stats");
            Some(entry.data)
        } else {
            tracing::debug!(key = %key, age_ms = entry.age_millis(now), "stats cache entry is stale");
            None
        }
    }

    async fn write_cache(&self, identifier: &str, stats: &ProfileStats) {
        let key = cache_key(identifier);
        let now = self.clock.now_millis();
        if let Err(e) = self.cache.set(&key, stats.clone(), now).await {
            tracing::warn!(key = %key, error = %e, "failed to write stats cache");
        }
    }
}

impl std::fmt::Debug for StatsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsService")
            .field("api", &self.api)
            .field("window", &self.window)
            .finish()
    }
}

/// One pass through the state machine for one consumer.
struct Session<'a> {
    identifier: &'a str,
    state: StatsState,
    mounted: &'a AtomicBool,
    updates: Option<&'a mpsc::UnboundedSender<StatsView>>,
    published: Option<StatsView>,
}

impl<'a> Session<'a> {
    fn new(
        identifier: &'a str,
        mounted: &'a AtomicBool,
        updates: Option<&'a mpsc::UnboundedSender<StatsView>>,
    ) -> Self {
        Self {
            identifier,
            state: StatsState::Idle,
            mounted,
            updates,
            published: None,
        }
    }

    fn view(&self) -> StatsView {
        self.state.view()
    }

    /// Reduce and publish. False once the consumer has gone away.
    fn apply(&mut self, event: StatsEvent) -> bool {
        if !self.advance(event) {
            return false;
        }
        self.publish();
        true
    }

    fn advance(&mut self, event: StatsEvent) -> bool {
        if !self.mounted.load(Ordering::SeqCst) {
            tracing::debug!(identifier = self.identifier, "stats consumer unmounted, dropping result");
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
        true
    }

    /// Send the current view unless it was already sent or the consumer
    /// has gone away.
    fn publish(&mut self) {
        if !self.mounted.load(Ordering::SeqCst) {
            tracing::debug!(identifier = self.identifier, "stats consumer unmounted, not publishing");
            return;
        }
        let view = self.state.view();
        if self.published.as_ref() == Some(&view) {
            return;
        }
        if let Some(tx) = self.updates {
            // The receiver only goes away with the handle, which unmounts first.
            let _ = tx.send(view.clone());
        }
        self.published = Some(view);
    }
}

/// Consumer side of a [`StatsService::spawn`] load.
pub struct StatsHandle {
    mounted: Arc<AtomicBool>,
    updates: mpsc::UnboundedReceiver<StatsView>,
    task: JoinHandle<StatsView>,
}

impl StatsHandle {
    /// Next view change, or `None` once the load has finished publishing.
    pub async fn next_view(&mut self) -> Option<StatsView> {
        self.updates.recv().await
    }

    /// Stop all further updates from this load.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Wait for the load to stop and return the last view it reached.
    pub async fn join(mut self) -> StatsView {
        match (&mut self.task).await {
            Ok(view) => view,
            Err(e) => {
                tracing::error!(error = %e, "stats task failed");
                StatsView::Error(StatsFailure {
                    kind: FailureKind::Transport,
                    message: e.to_string(),
                    status: None,
                })
            }
        }
    }
}

impl Drop for StatsHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}
