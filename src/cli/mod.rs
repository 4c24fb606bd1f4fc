//! CLI module for folio.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - GitHub stats, content lookup and CV data commands
//!
//! # Usage
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//! use folio::startup::FolioConfig;
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command, &FolioConfig::from_env()).await?;
//! ```

pub mod args;
pub mod cv;
pub mod show;
pub mod stats;
pub mod version;

pub use args::{parse_args, usage, CliCommand};
pub use cv::handle_cv_command;
pub use show::{handle_show_command, render_resolution};
pub use stats::{handle_stats_command, render_failure, render_stats};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::startup::FolioConfig;

/// Run a parsed CLI command.
///
/// Argument errors print the usage text and return an error so the
/// process exits non-zero.
pub async fn run_cli_command(command: CliCommand, config: &FolioConfig) -> Result<()> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Ok(())
        }
        CliCommand::Stats { user, refresh } => handle_stats_command(config, &user, refresh).await,
        CliCommand::Show(key) => handle_show_command(config, &key).await,
        CliCommand::Cv { data_dir } => handle_cv_command(&data_dir),
        CliCommand::Usage { error } => {
            eprintln!("{}", usage());
            match error {
                Some(message) => Err(eyre!(message)),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_usage_without_error_succeeds() {
        let result = run_cli_command(CliCommand::Usage { error: None }, &FolioConfig::default()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_usage_with_error_fails() {
        let command = CliCommand::Usage {
            error: Some("unknown command 'x'".to_string()),
        };
        let result = run_cli_command(command, &FolioConfig::default()).await;
        assert!(result.unwrap_err().to_string().contains("unknown command"));
    }
}
