//! Unauthenticated client for the two GitHub REST endpoints the stats use.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::models::{ProfileInfo, RepositoryInfo};
use crate::error::NetworkError;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
const ACCEPT: &str = "application/vnd.github+json";

/// GitHub REST client.
///
/// Never sends credentials, so every caller shares the per-IP
/// unauthenticated quota.
#[derive(Clone)]
pub struct GitHubApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
    user_agent: String,
    per_page: u32,
}

impl GitHubApi {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("folio/{}", env!("CARGO_PKG_VERSION")),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn profile_url(&self, identifier: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(identifier))
    }

    pub fn repositories_url(&self, identifier: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.base_url,
            urlencoding::encode(identifier),
            self.per_page
        )
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
        headers.insert("Accept".to_string(), ACCEPT.to_string());
        headers
    }

    pub async fn fetch_profile(&self, identifier: &str) -> Result<ProfileInfo, NetworkError> {
        self.get_json(&self.profile_url(identifier)).await
    }

    /// First page of the user's repositories.
    pub async fn fetch_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositoryInfo>, NetworkError> {
        self.get_json(&self.repositories_url(identifier)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetworkError> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url, &self.headers())
            .await
            .map_err(|e| NetworkError::from_transport(&e, url))?;

        if !response.is_success() {
            let err = NetworkError::from_response(&response);
            tracing::warn!(url, status = response.status, code = err.error_code(), "GitHub request failed");
            return Err(err);
        }

        response.json().map_err(|e| NetworkError::from_decode(&e))
    }
}

impl std::fmt::Debug for GitHubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubApi")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("per_page", &self.per_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "https://api.test";

    fn api(http: &Arc<MockHttpClient>) -> GitHubApi {
        GitHubApi::new(http.clone()).with_base_url(format!("{}/", BASE))
    }

    fn profile_json() -> serde_json::Value {
        json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.example/octocat.png",
            "html_url": "https://github.com/octocat",
            "public_repos": 3,
            "followers": 10,
            "following": 1,
            "created_at": "2011-01-25T18:44:36Z",
            "bio": null
        })
    }

    #[test]
    fn test_urls() {
        let http = Arc::new(MockHttpClient::new());
        let api = api(&http).with_per_page(50);
        assert_eq!(api.base_url(), BASE);
        assert_eq!(api.profile_url("octocat"), "https://api.test/users/octocat");
        assert_eq!(
            api.repositories_url("octocat"),
            "https://api.test/users/octocat/repos?per_page=50"
        );
        assert_eq!(api.profile_url("a b/c"), "https://api.test/users/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_fetch_profile_sends_headers_without_auth() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "https://api.test/users/octocat",
            MockResponse::json(200, &profile_json()),
        );

        let profile = api(&http).with_user_agent("folio-test").fetch_profile("octocat").await.unwrap();
        assert_eq!(profile.login, "octocat");

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        let headers = &requests[0].headers;
        assert_eq!(headers.get("User-Agent").map(String::as_str), Some("folio-test"));
        assert_eq!(headers.get("Accept").map(String::as_str), Some(ACCEPT));
        assert!(!headers.keys().any(|k| k.eq_ignore_ascii_case("authorization")));
    }

    #[tokio::test]
    async fn test_rate_limited_403() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "https://api.test/users/octocat",
            MockResponse::json(
                403,
                &json!({"message": "API rate limit exceeded for 1.2.3.4.", "documentation_url": "https://docs.github.com"}),
            ),
        );

        let err = api(&http).fetch_profile("octocat").await.unwrap_err();
        assert_eq!(err, NetworkError::RateLimited);
    }

    #[tokio::test]
    async fn test_plain_403_is_http_status() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "https://api.test/users/octocat",
            MockResponse::text(403, "forbidden"),
        );

        let err = api(&http).fetch_profile("octocat").await.unwrap_err();
        assert_eq!(
            err,
            NetworkError::HttpStatus {
                status: 403,
                reason: "Forbidden".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_with_marker_is_rate_limited() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::Error(HttpError::Other(
            "API rate limit exceeded".to_string(),
        )));

        let err = api(&http).fetch_repositories("octocat").await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::text(200, "<html>"));

        let err = api(&http).fetch_profile("octocat").await.unwrap_err();
        assert!(matches!(err, NetworkError::InvalidResponse { .. }));
    }
}
