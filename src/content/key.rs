//! Navigation keys and the routes they map to.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::slug::slugify;
use crate::error::FolioError;

/// Identifier of the sentinel home route.
pub const HOME_IDENTIFIER: &str = "home";

/// Top-level content category, one per menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Home,
    Experiences,
    Projects,
    Skills,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Home,
        Category::Experiences,
        Category::Projects,
        Category::Skills,
    ];

    /// Folder name used in content paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Home => "home",
            Category::Experiences => "experiences",
            Category::Projects => "projects",
            Category::Skills => "skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                FolioError::config(format!(
                    "unknown category '{}' (expected home, experiences, projects or skills)",
                    s
                ))
            })
    }
}

/// Canonical path of a content unit, e.g. `skills/docker`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentPath(String);

impl ContentPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Join non-empty segments with `/`.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Where a navigation action leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRoute {
    /// The fixed profile view; nothing is loaded.
    Home,
    /// A content unit at a composed path.
    Module(ContentPath),
}

/// Maps active menu tabs to subcategory folders.
///
/// Tabs are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabMapping {
    folders: HashMap<String, String>,
}

impl TabMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's menu tabs: `PHP` and `SysDevOps`.
    pub fn standard() -> Self {
        Self::new()
            .with_tab("PHP", "php")
            .with_tab("SysDevOps", "sysdevops")
    }

    pub fn with_tab(mut self, tab: &str, folder: impl Into<String>) -> Self {
        self.insert(tab, folder);
        self
    }

    pub fn insert(&mut self, tab: &str, folder: impl Into<String>) {
        self.folders.insert(tab.to_lowercase(), folder.into());
    }

    pub fn subcategory_for(&self, tab: &str) -> Option<&str> {
        self.folders.get(&tab.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// A navigation request: which entry of which category the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentKey {
    pub category: Category,
    /// Display name of the entry ("Docker", "Senior PHP Developer").
    pub identifier: String,
    /// Explicit file name that takes precedence over the display name.
    pub file_name_override: Option<String>,
    /// Menu tab active when the entry was picked.
    pub active_tab: Option<String>,
}

impl ContentKey {
    pub fn new(category: Category, identifier: impl Into<String>) -> Self {
        Self {
            category,
            identifier: identifier.into(),
            file_name_override: None,
            active_tab: None,
        }
    }

    /// The sentinel key for the profile view.
    pub fn home() -> Self {
        Self::new(Category::Home, HOME_IDENTIFIER)
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name_override = Some(file_name.into());
        self
    }

    pub fn with_active_tab(mut self, tab: impl Into<String>) -> Self {
        self.active_tab = Some(tab.into());
        self
    }

    /// Slug of the override if present, else of the display name.
    pub fn slug(&self) -> String {
        match self.file_name_override.as_deref() {
            Some(file_name) if !file_name.trim().is_empty() => slugify(file_name),
            _ => slugify(&self.identifier),
        }
    }

    /// The sentinel is keyed on the identifier; a file-name override never
    /// turns a key into it.
    pub fn is_home(&self) -> bool {
        self.category == Category::Home && slugify(&self.identifier) == HOME_IDENTIFIER
    }

    /// Compose the route for this key.
    ///
    /// `{category}/{subcategory}/{slug}` when the active tab maps to a
    /// folder, `{category}/{slug}` otherwise.
    pub fn route(&self, tabs: &TabMapping) -> ContentRoute {
        if self.is_home() {
            return ContentRoute::Home;
        }

        let slug = self.slug();
        let subcategory = self
            .active_tab
            .as_deref()
            .and_then(|tab| tabs.subcategory_for(tab))
            .unwrap_or("");

        ContentRoute::Module(ContentPath::from_segments([
            self.category.as_str(),
            subcategory,
            slug.as_str(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabMapping {
        TabMapping::standard()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("skills".parse::<Category>().unwrap(), Category::Skills);
        assert_eq!(" Projects ".parse::<Category>().unwrap(), Category::Projects);
        assert!("books".parse::<Category>().is_err());
    }

    #[test]
    fn test_route_from_display_name() {
        let key = ContentKey::new(Category::Skills, "Docker");
        assert_eq!(key.route(&tabs()), ContentRoute::Module("skills/docker".into()));
    }

    #[test]
    fn test_route_prefers_file_name_override() {
        let key = ContentKey::new(Category::Skills, "CI/CD Pipelines").with_file_name("CI CD");
        assert_eq!(key.route(&tabs()), ContentRoute::Module("skills/ci-cd".into()));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let key = ContentKey::new(Category::Skills, "Linux").with_file_name("  ");
        assert_eq!(key.slug(), "linux");
    }

    #[test]
    fn test_route_with_mapped_tab() {
        let key = ContentKey::new(Category::Experiences, "Senior Developer").with_active_tab("php");
        assert_eq!(
            key.route(&tabs()),
            ContentRoute::Module("experiences/php/senior-developer".into())
        );
    }

    #[test]
    fn test_route_with_unmapped_tab() {
        let key = ContentKey::new(Category::Projects, "Portfolio").with_active_tab("Books");
        assert_eq!(key.route(&tabs()), ContentRoute::Module("projects/portfolio".into()));
    }

    #[test]
    fn test_home_sentinel() {
        assert_eq!(ContentKey::home().route(&tabs()), ContentRoute::Home);
        assert_eq!(
            ContentKey::new(Category::Home, "Home").route(&tabs()),
            ContentRoute::Home
        );
        assert_eq!(
            ContentKey::new(Category::Home, "About").route(&tabs()),
            ContentRoute::Module("home/about".into())
        );
        assert_eq!(
            ContentKey::new(Category::Skills, "home").route(&tabs()),
            ContentRoute::Module("skills/home".into())
        );
    }

    #[test]
    fn test_override_does_not_select_home_sentinel() {
        let key = ContentKey::new(Category::Home, "About").with_file_name("home");
        assert!(!key.is_home());
        assert_eq!(key.route(&tabs()), ContentRoute::Module("home/home".into()));

        let key = ContentKey::new(Category::Home, "Home").with_file_name("welcome");
        assert!(key.is_home());
        assert_eq!(key.route(&tabs()), ContentRoute::Home);
    }

    #[test]
    fn test_content_path_segments() {
        let path = ContentPath::from_segments(["experiences", "", "acme"]);
        assert_eq!(path.as_str(), "experiences/acme");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["experiences", "acme"]);
    }
}
