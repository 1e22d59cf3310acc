//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed on a path with no resource-specific
    /// contract. Responds with a uniform 500.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Store failure on a read path that answers 404 with a
    /// resource-specific message.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required body field missing on a create/update. Responds 422 with an
    /// empty body.
    #[error("Unprocessable entity")]
    Unprocessable,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match self {
            Self::Database(_) | Self::Internal(_) => {
                // Don't expose internal error details to clients
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("That merchant does not exist in the database".to_string());
        assert_eq!(
            err.to_string(),
            "Not found: That merchant does not exist in the database"
        );
    }

    #[test]
    fn test_status_codes() {
        fn get_status(err: ApiError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(ApiError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::Unprocessable),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(ApiError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_not_found_body_carries_error_message() {
        let response =
            ApiError::NotFound("There are no merchants in the database".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "There are no merchants in the database");
    }

    #[tokio::test]
    async fn test_unprocessable_body_is_empty() {
        let response = ApiError::Unprocessable.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert!(bytes.is_empty());
    }
}
