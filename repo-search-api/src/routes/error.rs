use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{SearchFailed, ValidationError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    title: &'static str,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_values: Option<&'static [&'static str]>,
}

pub struct ApiError {
    status: StatusCode,
    title: &'static str,
    message: String,
    allowed_values: Option<&'static [&'static str]>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            title,
            message: message.into(),
            allowed_values: None,
        }
    }

    pub fn with_allowed_values(mut self, allowed_values: &'static [&'static str]) -> Self {
        self.allowed_values = Some(allowed_values);
        self
    }

    /// Generic server error that leaks no internal detail.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            title: self.title,
            error: self.message,
            allowed_values: self.allowed_values,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!("Validation error: {}", err);
        let api_error = Self::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            format!("Validation error: {}", err),
        );
        match err.allowed_values() {
            Some(allowed) => api_error.with_allowed_values(allowed),
            None => api_error,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        tracing::warn!("Request parameter type mismatch: {}", err);
        Self::new(
            StatusCode::BAD_REQUEST,
            "Type Conversion Error",
            "Request parameter type mismatch",
        )
    }
}

impl From<SearchFailed> for ApiError {
    fn from(err: SearchFailed) -> Self {
        tracing::error!(kind = ?err.kind(), "{}", err);
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Repository Search Failed",
            err.to_string(),
        )
    }
}
