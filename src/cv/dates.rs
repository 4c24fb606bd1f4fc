//! Sort keys for the free-form dates used in the CV data files.
//!
//! Dates look like `05.2025`, `10.2022 - 06.2023`, `14.02.2024`, `2019`
//! or `Ongoing`. They are reduced to a `YYYYMM` number for ordering.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sort key of anything still running; above every real date.
pub const ONGOING_SORT_KEY: u32 = 999_999;

static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\.(\d{4})").expect("Invalid month.year regex"));

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}\.(\d{1,2})\.(\d{4})").expect("Invalid day.month.year regex")
});

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("Invalid year regex"));

/// Reduce a date to `YYYYMM` for newest-first ordering.
///
/// Ranges sort by their end. Dates with no recognisable year sort as
/// `today`.
pub fn parse_date_to_number(date: &str, today: NaiveDate) -> u32 {
    if date.to_lowercase().contains("ongoing") {
        return ONGOING_SORT_KEY;
    }

    let mut parts = date.split('-').map(str::trim);
    let start = parts.next().unwrap_or_default();
    let date = parts.next().unwrap_or(start);

    if let Some(caps) = MONTH_YEAR.captures(date) {
        let month = number(&caps[1]);
        let year = number(&caps[2]);
        if month > 12 {
            if let Some(full) = DAY_MONTH_YEAR.captures(date) {
                return number(&full[2]) * 100 + number(&full[1]);
            }
        }
        return year * 100 + month;
    }

    match YEAR.captures(date) {
        Some(caps) => number(&caps[1]) * 100,
        None => today.year() as u32 * 100 + today.month(),
    }
}

/// First `20xx` year in `date`, else the current year.
pub fn extract_year(date: &str, today: NaiveDate) -> i32 {
    YEAR.captures(date)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or_else(|| today.year())
}

// Captures are all-digit and at most four long.
fn number(digits: &str) -> u32 {
    digits.parse().unwrap_or_default()
}
