//! `folio stats <user>`: print a profile summary.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fmt::Write;
use std::sync::Arc;

use crate::adapters::{FileCache, ReqwestHttpClient, SystemClock};
use crate::startup::FolioConfig;
use crate::stats::{LoadOptions, ProfileStats, StatsFailure, StatsService, StatsView};

/// Repositories listed under "Top repositories".
const TOP_REPOSITORIES: usize = 5;

pub async fn handle_stats_command(config: &FolioConfig, user: &str, refresh: bool) -> Result<()> {
    let service = StatsService::from_config(
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileCache::<ProfileStats>::new(config.cache_dir.clone())),
        Arc::new(SystemClock),
        config,
    );

    match service.load(user, LoadOptions { refresh }).await {
        StatsView::Ready(stats) => {
            print!("{}", render_stats(&stats));
            Ok(())
        }
        StatsView::Error(failure) => Err(eyre!(render_failure(&failure))),
        StatsView::Loading => Err(eyre!("stats load did not finish")),
    }
}

/// Failure message followed by what to do about it.
pub fn render_failure(failure: &StatsFailure) -> String {
    format!("{}\n{}", failure.message, failure.recovery_hint())
}

/// Plain-text summary of `stats`.
pub fn render_stats(stats: &ProfileStats) -> String {
    let profile = &stats.profile;
    let mut out = String::new();

    let _ = writeln!(out, "{} (@{})", profile.display_name(), profile.login);
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = writeln!(out, "{}", bio.trim());
    }
    let _ = writeln!(out, "{}", profile.html_url);
    let _ = writeln!(
        out,
        "Member since {}",
        profile.created_at.format("%B %Y")
    );
    let _ = writeln!(
        out,
        "Repositories: {}  Followers: {}  Following: {}",
        profile.public_repos, profile.followers, profile.following
    );
    let _ = writeln!(
        out,
        "Stars: {}  Estimated commits: ~{}",
        stats.total_stars, stats.estimated_commits
    );

    if !stats.language_histogram.is_empty() {
        let languages: Vec<String> = stats
            .language_histogram
            .iter()
            .map(|l| format!("{} ({})", l.name, l.count))
            .collect();
        let _ = writeln!(out, "Top languages: {}", languages.join(", "));
    }

    if !stats.repositories.is_empty() {
        let _ = writeln!(out, "Top repositories:");
        for repo in stats.repositories.iter().take(TOP_REPOSITORIES) {
            let _ = write!(out, "  {:>5} *  {}", repo.stargazers_count, repo.name);
            if let Some(language) = &repo.language {
                let _ = write!(out, " [{}]", language);
            }
            let _ = writeln!(out);
        }
    }

    out
}
