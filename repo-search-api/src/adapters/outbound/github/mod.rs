mod conversions;

use async_trait::async_trait;
use github_api::{GitHubApiError, GitHubClient, SearchPage, SearchQuery};

use crate::domain::{
    models::{SearchCriteria, SearchResults},
    ports::outbound::RepositoryProvider,
    SearchFailed,
};

use self::conversions::{to_domain_repository, to_search_failed, to_search_query};

/// The part of the GitHub client the adapter depends on.
#[async_trait]
pub trait GitHubSearchClient: Send + Sync + 'static {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchPage, GitHubApiError>;
}

#[async_trait]
impl GitHubSearchClient for GitHubClient {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchPage, GitHubApiError> {
        GitHubClient::search_repositories(self, query).await
    }
}

/// Adapter that wraps a GitHub client to implement the `RepositoryProvider` port.
///
/// Records that cannot be converted are dropped from the page while `total`
/// keeps the count GitHub reported.
pub struct GitHubRepositoryAdapter<C: GitHubSearchClient = GitHubClient> {
    client: C,
}

impl<C: GitHubSearchClient> GitHubRepositoryAdapter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: GitHubSearchClient> RepositoryProvider for GitHubRepositoryAdapter<C> {
    async fn find_repositories(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, SearchFailed> {
        let query = to_search_query(criteria);

        let page = self
            .client
            .search_repositories(&query)
            .await
            .map_err(to_search_failed)?;

        let received = page.items.len();
        let items: Vec<_> = page
            .items
            .into_iter()
            .filter_map(|item| {
                let id = item.id;
                match to_domain_repository(item) {
                    Ok(repository) => Some(repository),
                    Err(error) => {
                        tracing::debug!(
                            repository_id = ?id,
                            error = %error,
                            "Skipping malformed GitHub repository record"
                        );
                        None
                    }
                }
            })
            .collect();

        if items.len() < received {
            tracing::warn!(
                dropped = received - items.len(),
                received,
                "Dropped malformed records from GitHub search page"
            );
        }

        Ok(SearchResults::new(page.total_count, items))
    }
}
