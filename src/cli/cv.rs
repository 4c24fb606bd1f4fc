//! `folio cv <data-dir>`: print the CV payload as JSON.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::Path;

use crate::cv::{build_cv, CvSources};

pub fn handle_cv_command(data_dir: &Path) -> Result<()> {
    let sources = CvSources::load(data_dir).map_err(|e| {
        tracing::debug!(code = e.error_code(), category = %e.category(), "CV data unavailable");
        eyre!("{}\n{}", e, e.recovery_hint())
    })?;
    let today = chrono::Local::now().date_naive();
    let cv = build_cv(&sources, today);
    println!("{}", serde_json::to_string_pretty(&cv)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn test_missing_data_dir_reports_hint() {
        let dir = TempDir::new().unwrap();
        let err = handle_cv_command(&dir.path().join("absent")).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("PHP.json"));
        assert!(text.ends_with(ErrorCategory::System.recovery_hint()));
    }
}
