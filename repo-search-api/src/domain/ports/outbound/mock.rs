//! Mock provider for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    models::{SearchCriteria, SearchResults},
    ports::outbound::RepositoryProvider,
    SearchFailed, SearchFailureKind,
};

/// Mock provider that replays queued outcomes and counts calls.
///
/// Once the queue is drained every call returns empty results.
#[derive(Clone, Default)]
pub struct MockRepositoryProvider {
    outcomes: Arc<Mutex<VecDeque<Result<SearchResults, SearchFailureKind>>>>,
    call_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_results(self, results: SearchResults) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(results));
        self
    }

    /// Queue a failure of the given kind.
    pub fn with_failure(self, kind: SearchFailureKind) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(kind));
        self
    }

    /// Number of times `find_repositories` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryProvider for MockRepositoryProvider {
    async fn find_repositories(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<SearchResults, SearchFailed> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(results)) => Ok(results),
            Some(Err(kind)) => Err(SearchFailed::without_cause(kind, "mock failure")),
            None => Ok(SearchResults::new(0, Vec::new())),
        }
    }
}
