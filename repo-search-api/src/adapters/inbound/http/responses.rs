//! HTTP response types for repository search.
//!
//! These types serialize to the JSON shape returned by `GET /api/repositories`.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{
    models::{Repository, SearchCriteria, SearchResults, SortDirection, SortField},
    popularity_score,
};

/// Response for the repository search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Total matches reported by GitHub, not the length of `items`.
    pub total: u64,
    pub items: Vec<RepositoryResponse>,
    pub metadata: MetadataResponse,
}

impl SearchResponse {
    /// Assemble the response, scoring every repository as of `now`.
    pub fn assemble(criteria: &SearchCriteria, results: &SearchResults, now: OffsetDateTime) -> Self {
        Self {
            total: results.total,
            items: results
                .items
                .iter()
                .map(|repository| RepositoryResponse::scored(repository, now))
                .collect(),
            metadata: MetadataResponse::from(criteria),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResponse {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub popularity_score: f64,
}

impl RepositoryResponse {
    fn scored(repository: &Repository, now: OffsetDateTime) -> Self {
        Self {
            id: repository.id,
            name: repository.name.clone(),
            full_name: repository.full_name.clone(),
            url: repository.url.clone(),
            description: repository.description.clone(),
            created_at: repository.created_at,
            updated_at: repository.updated_at,
            language: repository.language.clone(),
            stargazers_count: repository.stargazers_count,
            forks_count: repository.forks_count,
            popularity_score: popularity_score(repository, now),
        }
    }
}

/// Echo of the criteria the results were produced for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub language: Option<String>,
    /// Date in YYYY-MM-DD format.
    pub created_since: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
    pub page: u32,
    pub size: u32,
}

impl From<&SearchCriteria> for MetadataResponse {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            language: criteria.language().map(str::to_string),
            created_since: criteria.created_since().map(|date| date.to_string()),
            sort: criteria.sort(),
            direction: criteria.direction(),
            page: criteria.page(),
            size: criteria.size(),
        }
    }
}
