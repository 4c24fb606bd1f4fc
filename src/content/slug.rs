//! Slug derivation for display names.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Lowercase `name` and replace every run of whitespace with a single `-`.
///
/// Already-slugged input comes back unchanged.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN.replace_all(&name.to_lowercase(), "-").into_owned()
}
