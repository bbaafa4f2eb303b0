use async_trait::async_trait;

use crate::domain::{
    models::{SearchCriteria, SearchResults},
    SearchFailed,
};

/// Outbound port for fetching repositories from a hosting provider.
///
/// Implementations translate provider-specific failures into [`SearchFailed`];
/// nothing provider-specific crosses this boundary.
#[async_trait]
pub trait RepositoryProvider: Send + Sync + 'static {
    /// Fetch one page of repositories matching `criteria`.
    async fn find_repositories(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, SearchFailed>;
}
