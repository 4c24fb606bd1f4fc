use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account summary from `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileInfo {
    pub login: String,
    /// Display name; accounts without one send `null`
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileInfo {
    /// Display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{id}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    /// Primary language; `null` for repositories GitHub could not classify
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository count for one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageCount {
    pub name: String,
    pub count: u32,
}

/// Derived statistics for one profile. This is also the cached payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileStats {
    pub profile: ProfileInfo,
    /// Sorted by star count, descending
    pub repositories: Vec<RepositoryInfo>,
    pub total_stars: u64,
    /// At most five entries, most used first
    pub language_histogram: Vec<LanguageCount>,
    /// Rough approximation, not a real commit count
    pub estimated_commits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialize_with_nulls() {
        let json = r#"{
            "login": "octocat",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "public_repos": 8,
            "followers": 20,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "bio": null,
            "site_admin": false
        }"#;

        let profile: ProfileInfo = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name, None);
        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.public_repos, 8);
    }

    #[test]
    fn test_repository_deserialize() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repository",
            "stargazers_count": 80,
            "forks_count": 9,
            "language": null,
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:14:43Z",
            "fork": false
        }"#;

        let repo: RepositoryInfo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 80);
        assert_eq!(repo.language, None);
        assert_eq!(repo.description.as_deref(), Some("My first repository"));
    }
}
