use time::OffsetDateTime;

/// A repository as the rest of the service sees it, independent of the
/// upstream wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
}

/// One page of search results.
///
/// `total` is what upstream reported and can exceed `items.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub total: u64,
    pub items: Vec<Repository>,
}

impl SearchResults {
    pub fn new(total: u64, items: Vec<Repository>) -> Self {
        Self { total, items }
    }
}
