use github_api::{GitHubApiError, RepositoryItem, SearchQuery};
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

use crate::domain::{
    models::{Repository, SearchCriteria},
    SearchFailed, SearchFailureKind,
};

/// Why a raw GitHub record could not become a [`Repository`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid timestamp in `{field}`: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("negative count in `{field}`: {value}")]
    NegativeCount { field: &'static str, value: i64 },
}

/// Build the GitHub query for `criteria`. GitHub paging is requested
/// zero-based here; the client adds the 1-based offset on the wire.
pub fn to_search_query(criteria: &SearchCriteria) -> SearchQuery {
    SearchQuery {
        created_since: criteria.created_since(),
        language: criteria.language().map(str::to_string),
        sort: criteria.sort().as_ref().to_string(),
        order: criteria.direction().as_ref().to_string(),
        page: criteria.page() - 1,
        per_page: criteria.size(),
    }
}

/// Convert a GitHub repository record to a domain repository.
pub fn to_domain_repository(item: RepositoryItem) -> Result<Repository, ConversionError> {
    let id = item.id.ok_or(ConversionError::MissingField("id"))?;
    let name = item.name.ok_or(ConversionError::MissingField("name"))?;
    let full_name = item
        .full_name
        .ok_or(ConversionError::MissingField("full_name"))?;
    let url = item
        .html_url
        .ok_or(ConversionError::MissingField("html_url"))?;
    let created_at = item
        .created_at
        .as_deref()
        .ok_or(ConversionError::MissingField("created_at"))
        .and_then(|value| parse_timestamp("created_at", value))?;
    let updated_at = item
        .updated_at
        .as_deref()
        .map(|value| parse_timestamp("updated_at", value))
        .transpose()?;

    Ok(Repository {
        id,
        name,
        full_name,
        url,
        description: item.description,
        created_at,
        updated_at,
        language: item.language,
        stargazers_count: to_count("stargazers_count", item.stargazers_count)?,
        forks_count: to_count("forks_count", item.forks_count)?,
    })
}

/// GitHub timestamps are read as UTC wall-clock time; a trailing `Z` is
/// accepted and ignored.
fn parse_timestamp(field: &'static str, value: &str) -> Result<OffsetDateTime, ConversionError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let naive = value.strip_suffix('Z').unwrap_or(value);

    PrimitiveDateTime::parse(naive, &format)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| ConversionError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

fn to_count(field: &'static str, value: Option<i64>) -> Result<Option<u64>, ConversionError> {
    value
        .map(|count| {
            u64::try_from(count).map_err(|_| ConversionError::NegativeCount {
                field,
                value: count,
            })
        })
        .transpose()
}

/// Translate a GitHub API failure into the domain's search failure.
pub fn to_search_failed(err: GitHubApiError) -> SearchFailed {
    let (kind, message) = match &err {
        GitHubApiError::RateLimited { .. } => {
            tracing::warn!(error = %err, "GitHub API rate limit exceeded");
            (
                SearchFailureKind::RateLimited,
                "API rate limit exceeded. Please try again later.".to_string(),
            )
        }
        GitHubApiError::Client { .. } => {
            tracing::warn!(error = %err, "GitHub API client error");
            (
                SearchFailureKind::InvalidCriteria,
                "Invalid search criteria.".to_string(),
            )
        }
        GitHubApiError::Server { .. } => {
            tracing::error!(error = %err, "GitHub API server error");
            (
                SearchFailureKind::Unavailable,
                "External service temporarily unavailable.".to_string(),
            )
        }
        GitHubApiError::Unclassified(message) => {
            tracing::error!(error = %err, "Unexpected GitHub API error");
            (SearchFailureKind::Unexpected, message.clone())
        }
    };

    SearchFailed::new(kind, message, err)
}
