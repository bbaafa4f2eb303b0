//! Popularity ranking derived from a repository's stars, forks and update recency.

use time::OffsetDateTime;

use super::models::Repository;

const STARS_WEIGHT: f64 = 0.7;
const FORKS_WEIGHT: f64 = 0.2;
const RECENCY_WEIGHT: f64 = 0.1;

/// Recency of a repository updated today; decays as `1 / (days + 1)`.
const RECENCY_SCALE: f64 = 10.0;

/// Popularity score of `repository` as of `now`.
///
/// Missing counts or a missing update time contribute zero. An update time
/// after `now` counts as updated today.
pub fn popularity_score(repository: &Repository, now: OffsetDateTime) -> f64 {
    let stars = repository.stargazers_count.unwrap_or(0) as f64;
    let forks = repository.forks_count.unwrap_or(0) as f64;
    let recency = repository
        .updated_at
        .map(|updated_at| recency_score(updated_at, now))
        .unwrap_or(0.0);

    stars * STARS_WEIGHT + forks * FORKS_WEIGHT + recency * RECENCY_WEIGHT
}

fn recency_score(updated_at: OffsetDateTime, now: OffsetDateTime) -> f64 {
    let days_old = (now - updated_at).whole_days().max(0);
    RECENCY_SCALE / (days_old as f64 + 1.0)
}
