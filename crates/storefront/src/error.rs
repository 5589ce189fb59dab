//! Application error type and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Errors that bubble up to a handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Store(ref e) => {
                tracing::error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong".to_string())
            }
            Self::Internal(ref e) => {
                tracing::error!(error = %e, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong".to_string())
            }
            Self::NotFound(what) => (StatusCode::NOT_FOUND, what),
            Self::Unauthorized(why) => (StatusCode::UNAUTHORIZED, why),
            Self::BadRequest(why) => (StatusCode::BAD_REQUEST, why),
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("product".to_string()), StatusCode::NOT_FOUND),
            (
                AppError::Unauthorized("sign in first".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::BadRequest("price must be a number".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let response = AppError::Internal("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let error = AppError::NotFound("order 42".to_string());
        assert_eq!(error.to_string(), "not found: order 42");
    }
}
