use std::sync::Arc;

use crate::domain::ports::inbound::RepositorySearchService;

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<dyn RepositorySearchService>,
}

impl AppState {
    pub fn new(search_service: Arc<dyn RepositorySearchService>) -> Self {
        Self { search_service }
    }
}
