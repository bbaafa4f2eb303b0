use serde::Deserialize;
use time::Date;

/// Parameters of one repository search call.
///
/// `page` is zero-based here; the client converts it to GitHub's 1-based paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub created_since: Option<Date>,
    pub language: Option<String>,
    pub sort: String,
    pub order: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    /// Filter clauses for the `q` parameter, in the order GitHub receives them.
    pub fn filter_clauses(&self) -> Vec<String> {
        let mut clauses = Vec::new();

        if let Some(created_since) = self.created_since {
            clauses.push(format!("created:>={}", created_since));
        }

        if let Some(language) = self.language.as_deref().map(str::trim) {
            if !language.is_empty() {
                clauses.push(format!("language:{}", language));
            }
        }

        clauses
    }
}

/// Body of `GET /search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<RepositoryItem>,
}

/// A repository as GitHub returns it. Every field is optional on the wire so a
/// single odd record does not fail the whole page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<i64>,
    pub forks_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
