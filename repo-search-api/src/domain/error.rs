use thiserror::Error;

/// Inbound search criteria that cannot form a [`SearchCriteria`](super::models::SearchCriteria).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be provided")]
    Missing { field: &'static str },
    #[error("Invalid {field}: '{value}'. Must be one of: {}", .allowed.join(", "))]
    InvalidToken {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("Page must be greater than or equal to 1, got {0}")]
    PageOutOfRange(i64),
    #[error("Page must be less than or equal to {max}, got {0}", max = crate::domain::models::MAX_PAGE)]
    PageTooLarge(i64),
    #[error("Size must be between 1 and 100, got {0}")]
    SizeOutOfRange(i64),
    #[error("Invalid createdSince: '{0}'. Expected an ISO date (YYYY-MM-DD)")]
    InvalidDate(String),
}

impl ValidationError {
    /// The accepted tokens, for errors caused by an unrecognized token.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::InvalidToken { allowed, .. } => Some(allowed),
            _ => None,
        }
    }
}

/// Broad reason a search could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailureKind {
    RateLimited,
    InvalidCriteria,
    Unavailable,
    Unexpected,
}

/// The only failure the search service exposes. The upstream error that caused
/// it stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("Repository search failed: {message}")]
pub struct SearchFailed {
    kind: SearchFailureKind,
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SearchFailed {
    pub fn new(
        kind: SearchFailureKind,
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn without_cause(kind: SearchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn kind(&self) -> SearchFailureKind {
        self.kind
    }
}
