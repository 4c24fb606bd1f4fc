//! Command-line argument parsing for the folio CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use crate::content::{Category, ContentKey};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Fetch (or read cached) GitHub stats for a user
    Stats { user: String, refresh: bool },
    /// Resolve and print one content unit
    Show(ContentKey),
    /// Build CV data from a directory of JSON files
    Cv { data_dir: PathBuf },
    /// Print usage, optionally after an argument error
    Usage { error: Option<String> },
}

impl CliCommand {
    fn usage_error(message: impl Into<String>) -> Self {
        CliCommand::Usage {
            error: Some(message.into()),
        }
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Usage { error: None };
    };

    match command.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "stats" => parse_stats(rest),
        "show" => parse_show(rest),
        "cv" => match rest {
            [dir] => CliCommand::Cv {
                data_dir: PathBuf::from(dir),
            },
            _ => CliCommand::usage_error("cv expects exactly one data directory"),
        },
        "--help" | "-h" | "help" => CliCommand::Usage { error: None },
        other => CliCommand::usage_error(format!("unknown command '{}'", other)),
    }
}

fn parse_stats(rest: &[String]) -> CliCommand {
    let mut user = None;
    let mut refresh = false;
    for arg in rest {
        match arg.as_str() {
            "--refresh" => refresh = true,
            flag if flag.starts_with("--") => {
                return CliCommand::usage_error(format!("unknown stats option '{}'", flag))
            }
            value if user.is_none() => user = Some(value.to_string()),
            extra => return CliCommand::usage_error(format!("unexpected argument '{}'", extra)),
        }
    }

    match user {
        Some(user) => CliCommand::Stats { user, refresh },
        None => CliCommand::usage_error("stats expects a GitHub user name"),
    }
}

fn parse_show(rest: &[String]) -> CliCommand {
    let mut positional = Vec::new();
    let mut file_name = None;
    let mut tab = None;

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--file" | "--tab" => {
                let Some(value) = iter.next() else {
                    return CliCommand::usage_error(format!("{} expects a value", arg));
                };
                if arg == "--file" {
                    file_name = Some(value.clone());
                } else {
                    tab = Some(value.clone());
                }
            }
            flag if flag.starts_with("--") => {
                return CliCommand::usage_error(format!("unknown show option '{}'", flag))
            }
            value => positional.push(value.to_string()),
        }
    }

    let [category, name] = positional.as_slice() else {
        return CliCommand::usage_error("show expects <category> <name>");
    };
    let category: Category = match category.parse() {
        Ok(category) => category,
        Err(e) => return CliCommand::usage_error(e.to_string()),
    };

    let mut key = ContentKey::new(category, name.clone());
    if let Some(file_name) = file_name {
        key = key.with_file_name(file_name);
    }
    if let Some(tab) = tab {
        key = key.with_active_tab(tab);
    }
    CliCommand::Show(key)
}

/// Help text printed for `Usage`.
pub fn usage() -> &'static str {
    "Usage:
  folio --version
  folio stats <user> [--refresh]
  folio show <home|experiences|projects|skills> <name> [--file <name>] [--tab <tab>]
  folio cv <data-dir>

Environment:
  FOLIO_GITHUB_API, FOLIO_CONTENT_DIR, FOLIO_CACHE_DIR, FOLIO_CACHE_TTL_SECS, FOLIO_LOG"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("folio")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Usage { error: None });
    }

    #[test]
    fn test_parse_stats() {
        assert_eq!(
            parse(&["stats", "octocat"]),
            CliCommand::Stats {
                user: "octocat".to_string(),
                refresh: false
            }
        );
        assert_eq!(
            parse(&["stats", "--refresh", "octocat"]),
            CliCommand::Stats {
                user: "octocat".to_string(),
                refresh: true
            }
        );
        assert!(matches!(parse(&["stats"]), CliCommand::Usage { error: Some(_) }));
    }

    #[test]
    fn test_parse_show() {
        let expected = ContentKey::new(Category::Experiences, "Senior Developer")
            .with_file_name("senior")
            .with_active_tab("PHP");
        assert_eq!(
            parse(&[
                "show",
                "experiences",
                "Senior Developer",
                "--file",
                "senior",
                "--tab",
                "PHP"
            ]),
            CliCommand::Show(expected)
        );
    }

    #[test]
    fn test_parse_show_errors() {
        assert!(matches!(
            parse(&["show", "books", "Dune"]),
            CliCommand::Usage { error: Some(_) }
        ));
        assert!(matches!(
            parse(&["show", "skills", "Docker", "--tab"]),
            CliCommand::Usage { error: Some(_) }
        ));
        assert!(matches!(
            parse(&["show", "skills"]),
            CliCommand::Usage { error: Some(_) }
        ));
    }

    #[test]
    fn test_parse_cv() {
        assert_eq!(
            parse(&["cv", "data"]),
            CliCommand::Cv {
                data_dir: PathBuf::from("data")
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse(&["--unknown"]),
            CliCommand::Usage { error: Some(_) }
        ));
    }
}
