//! Summary metrics computed from a fetched profile and its repositories.

use std::collections::HashMap;

use super::models::{LanguageCount, ProfileInfo, ProfileStats, RepositoryInfo};

/// Commits assumed per repository for the commit estimate.
pub const COMMITS_PER_REPOSITORY: u64 = 15;

/// Number of languages kept in the histogram.
pub const TOP_LANGUAGES: usize = 5;

/// Build [`ProfileStats`] from a successful pair of fetches.
pub fn derive_stats(profile: ProfileInfo, mut repositories: Vec<RepositoryInfo>) -> ProfileStats {
    let total_stars = repositories.iter().map(|r| r.stargazers_count).sum();
    let estimated_commits = repositories.len() as u64 * COMMITS_PER_REPOSITORY;
    // Histogram ties are broken by API order, so count before sorting.
    let language_histogram = language_histogram(&repositories);

    // sort_by is stable
    repositories.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    ProfileStats {
        profile,
        repositories,
        total_stars,
        language_histogram,
        estimated_commits,
    }
}

/// Count repositories per language, most used first, top [`TOP_LANGUAGES`].
///
/// Missing languages and the literal string `"null"` are skipped. Equal
/// counts keep the order in which the language first appeared.
pub fn language_histogram(repositories: &[RepositoryInfo]) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        if language == "null" {
            continue;
        }
        match index.get(language) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(language, counts.len());
                counts.push(LanguageCount {
                    name: language.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_LANGUAGES);
    counts
}
