use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_with::{serde_as, NoneAsEmptyString};
use time::{Date, OffsetDateTime};
use tracing::instrument;

use crate::{
    adapters::inbound::http::SearchResponse,
    domain::models::{parse_iso_date, RawSearchCriteria, SearchCriteria},
    routes::ApiError,
    AppState,
};

const DEFAULT_SORT: &str = "stars";
const DEFAULT_DIRECTION: &str = "desc";
const DEFAULT_PAGE: i64 = 1;
const DEFAULT_SIZE: i64 = 10;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search_repositories))
}

/// Query string of the search endpoint. Parameters sent with an empty value
/// are treated as absent, so they fall back to their defaults.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRepositoriesQuery {
    #[serde(default)]
    language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_created_since")]
    created_since: Option<Date>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    page: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    size: Option<i64>,
}

/// A malformed date fails extraction, which surfaces as a type conversion error.
fn deserialize_created_since<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => parse_iso_date(&value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<SearchRepositoriesQuery> for RawSearchCriteria {
    fn from(query: SearchRepositoriesQuery) -> Self {
        Self {
            language: query.language,
            created_since: query.created_since.map(|date| date.to_string()),
            sort: Some(non_blank(query.sort).unwrap_or_else(|| DEFAULT_SORT.to_string())),
            direction: Some(
                non_blank(query.direction).unwrap_or_else(|| DEFAULT_DIRECTION.to_string()),
            ),
            page: Some(query.page.unwrap_or(DEFAULT_PAGE)),
            size: Some(query.size.unwrap_or(DEFAULT_SIZE)),
        }
    }
}

#[instrument(name = "GET /api/repositories", skip(app_state))]
async fn search_repositories(
    State(app_state): State<AppState>,
    query: Result<Query<SearchRepositoriesQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query?;
    let criteria = SearchCriteria::try_from(RawSearchCriteria::from(query))?;

    let results = app_state
        .search_service
        .search_repositories(&criteria)
        .await?;

    Ok(Json(SearchResponse::assemble(
        &criteria,
        &results,
        OffsetDateTime::now_utc(),
    )))
}
