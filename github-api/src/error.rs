use thiserror::Error;

/// Failure categories of a GitHub search call.
///
/// Status-based variants carry the raw response body for diagnostics.
#[derive(Error, Debug)]
pub enum GitHubApiError {
    /// GitHub signals quota exhaustion with a plain 403, so every 403 lands here.
    #[error("GitHub API rate limit exceeded: {body}")]
    RateLimited { body: String },
    #[error("GitHub API client error ({status}): {body}")]
    Client { status: u16, body: String },
    #[error("GitHub API server error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("{0}")]
    Unclassified(String),
}

impl GitHubApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            403 => Self::RateLimited { body },
            400..=499 => Self::Client { status, body },
            500..=599 => Self::Server { status, body },
            _ => Self::Unclassified(format!(
                "Unexpected GitHub API response status {}: {}",
                status, body
            )),
        }
    }
}

impl From<reqwest::Error> for GitHubApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Unclassified(format!("GitHub API request timed out: {}", err))
        } else {
            Self::Unclassified(format!("GitHub API request failed: {}", err))
        }
    }
}
