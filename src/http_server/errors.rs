//! # HTTP Errors
//!
//! Every failure on a request path ends up here. The client always gets the
//! same 500 and plain text body; the cause is only written to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Body sent with every failed response
pub const FAILURE_BODY: &str = "Something broke!";

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while serving a request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Persistence layer failure
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Request body or query string could not be extracted
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (self.status_code(), FAILURE_BODY).into_response()
    }
}
