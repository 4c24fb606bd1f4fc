//! Tracing subscriber setup for the binary.

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`info`, `folio=debug`, ...).
pub const ENV_LOG: &str = "FOLIO_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from `FOLIO_LOG`, falling back to `info` when unset or invalid.
pub fn log_filter() -> EnvFilter {
    let env = std::env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::from_str(&env).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_invalid_filter_falls_back() {
        std::env::set_var(ENV_LOG, "folio=notalevel");
        let filter = log_filter();
        std::env::remove_var(ENV_LOG);
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    #[serial]
    fn test_filter_from_env() {
        std::env::set_var(ENV_LOG, "folio=debug");
        let filter = log_filter();
        std::env::remove_var(ENV_LOG);
        assert_eq!(filter.to_string(), "folio=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
