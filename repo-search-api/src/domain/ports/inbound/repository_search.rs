use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{SearchCriteria, SearchResults},
    SearchFailed,
};

/// Inbound port for repository search.
///
/// HTTP handlers call this with criteria that already passed validation.
#[async_trait]
pub trait RepositorySearchService: Send + Sync + 'static {
    /// Search repositories, serving repeated identical criteria from cache.
    async fn search_repositories(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Arc<SearchResults>, SearchFailed>;
}
