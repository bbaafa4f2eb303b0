use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::instrument;

use crate::{GitHubApiError, GitHubURL, SearchPage, SearchQuery};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub base_url: String,
    /// Personal access token. Anonymous requests get a much smaller quota.
    pub token: Option<String>,
    pub api_version: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: concat!("repo-search/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Thin client for the GitHub repository search endpoint.
///
/// One call is one round trip. Nothing is retried here; a timeout surfaces as
/// [`GitHubApiError::Unclassified`] like any other transport failure.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, GitHubApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_str(&config.api_version).map_err(|e| {
                GitHubApiError::Unclassified(format!("Invalid GitHub API version header: {}", e))
            })?,
        );

        if let Some(token) = config.token.as_deref().filter(|t| !t.trim().is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|e| {
                    GitHubApiError::Unclassified(format!("Invalid GitHub token header: {}", e))
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, query), fields(page = query.page, per_page = query.per_page))]
    pub async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage, GitHubApiError> {
        let url = GitHubURL::new(&self.base_url)
            .append_path("/search/repositories")
            .with_search_query(query);

        tracing::debug!(url = %url.as_ref(), "Querying GitHub repository search");

        let resp = self.http.get(url.as_ref()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GitHubApiError::from_status(status.as_u16(), body));
        }

        let page = resp.json::<SearchPage>().await.map_err(|e| {
            GitHubApiError::Unclassified(format!(
                "Failed to parse GitHub search response as JSON: {}",
                e
            ))
        })?;

        if page.incomplete_results {
            tracing::warn!(
                total_count = page.total_count,
                "GitHub reported incomplete search results"
            );
        }

        Ok(page)
    }
}
