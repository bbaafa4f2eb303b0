use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::instrument;

use crate::domain::{
    models::{SearchCriteria, SearchResults},
    ports::{inbound::RepositorySearchService, outbound::RepositoryProvider},
    SearchFailed,
};

/// Bounds of the search result cache.
#[derive(Debug, Clone)]
pub struct SearchCacheConfig {
    /// Maximum number of cached result pages.
    pub max_capacity: u64,
    /// How long a cached page is served before upstream is asked again.
    pub time_to_live: Duration,
}

impl Default for SearchCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1_000,
            time_to_live: Duration::from_secs(10 * 60),
        }
    }
}

/// Implementation of the RepositorySearchService inbound port.
///
/// Answers from an in-memory cache keyed by the full criteria and falls back
/// to the provider on a miss. Only successful results are cached, so a failed
/// upstream call is retried on the next identical request.
///
/// Concurrent misses for the same criteria may each reach the provider; the
/// last result stored wins.
pub struct RepositorySearchServiceImpl<P: RepositoryProvider> {
    provider: Arc<P>,
    cache: Cache<SearchCriteria, Arc<SearchResults>>,
}

impl<P: RepositoryProvider> RepositorySearchServiceImpl<P> {
    pub fn new(provider: Arc<P>, cache_config: SearchCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_config.max_capacity)
            .time_to_live(cache_config.time_to_live)
            .build();

        Self { provider, cache }
    }
}

#[async_trait]
impl<P: RepositoryProvider> RepositorySearchService for RepositorySearchServiceImpl<P> {
    #[instrument(name = "RepositorySearchService::search_repositories", skip(self))]
    async fn search_repositories(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Arc<SearchResults>, SearchFailed> {
        if let Some(results) = self.cache.get(criteria) {
            tracing::debug!("Serving search results from cache");
            return Ok(results);
        }

        tracing::debug!("Cache miss, querying repository provider");
        let results = Arc::new(self.provider.find_repositories(criteria).await?);
        self.cache.insert(criteria.clone(), results.clone());

        Ok(results)
    }
}
