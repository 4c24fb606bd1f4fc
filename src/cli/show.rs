//! `folio show <category> <name>`: resolve and print one content unit.

use color_eyre::Result;
use std::sync::Arc;

use crate::content::{ActiveContent, ContentKey, ContentResolver, DirectoryProvider, Resolution};
use crate::error::ErrorCategory;
use crate::startup::FolioConfig;

pub async fn handle_show_command(config: &FolioConfig, key: &ContentKey) -> Result<()> {
    let provider = DirectoryProvider::new(config.content_dir.clone());
    let resolver = ContentResolver::new(Arc::new(provider))
        .with_tabs(config.tab_subcategories.clone())
        .with_fallback(config.fallback_path.as_str());

    let resolution = resolver.resolve(key).await;
    print!("{}", render_resolution(&resolution));
    Ok(())
}

/// Terminal rendering of whatever a resolution settled on.
pub fn render_resolution(resolution: &Resolution) -> String {
    match &resolution.content {
        ActiveContent::Profile => "(profile view)\n".to_string(),
        ActiveContent::Loaded(content) => format!("{}\n", content.plain_text()),
        ActiveContent::Fallback { requested, content } => format!(
            "[{} not found, showing {}]\n\n{}\n",
            requested,
            content.path(),
            content.plain_text()
        ),
        ActiveContent::Empty => match &resolution.degraded {
            Some(err) => format!(
                "[nothing to show: {}]\n{}\n",
                err,
                ErrorCategory::Content.recovery_hint()
            ),
            None => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, ContentRegistry};

    #[tokio::test]
    async fn test_render_fallback_and_empty() {
        let registry = ContentRegistry::new().with_markdown("error", "# Oops\n\nNot here.");
        let resolver = ContentResolver::new(Arc::new(registry));

        let fallback = resolver
            .resolve(&ContentKey::new(Category::Skills, "Docker"))
            .await;
        let text = render_resolution(&fallback);
        assert!(text.starts_with("[skills/docker not found, showing error]"));
        assert!(text.contains("Not here."));

        let empty = ContentResolver::new(Arc::new(ContentRegistry::new()))
            .resolve(&ContentKey::new(Category::Skills, "Docker"))
            .await;
        assert_eq!(
            render_resolution(&empty),
            format!(
                "[nothing to show: content not found: error]\n{}\n",
                ErrorCategory::Content.recovery_hint()
            )
        );
    }

    #[tokio::test]
    async fn test_render_profile() {
        let resolver = ContentResolver::new(Arc::new(ContentRegistry::new()));
        let resolution = resolver.resolve(&ContentKey::home()).await;
        assert_eq!(render_resolution(&resolution), "(profile view)\n");
    }
}
