//! Server Error Types
//!
//! Error types for the static host and their conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The dashboard bundle has not been built into `dist_dir`
    #[error("App shell not found at {0:?}")]
    ShellMissing(PathBuf),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::ShellMissing(_) => (StatusCode::SERVICE_UNAVAILABLE, "SHELL_MISSING"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        tracing::error!(
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let missing = ServerError::ShellMissing(PathBuf::from("dist/index.html"));
        assert_eq!(missing.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);

        let io = ServerError::from(std::io::Error::other("disk"));
        assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
