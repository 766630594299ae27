//! REST API endpoints.
//!
//! Axum-based HTTP API for registering users, logging exercises, and
//! reading exercise logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod routes;
pub mod state;

use crate::storage::StorageError;
use crate::validate::ValidationError;
use state::AppState;

/// API error types.
///
/// Validation and not-found conditions are client-visible outcomes, not
/// transport failures: they map to a 200 response with an `error` body.
/// Storage faults are logged and surface as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no user with id {0}")]
    UserNotFound(String),

    #[error("Server error")]
    Storage(#[from] StorageError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::UserNotFound(_) => StatusCode::OK,
            ApiError::Storage(e) => {
                tracing::error!("Storage fault: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/hello", get(routes::meta::hello))
        .route(
            "/api/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/api/users/:user_id/exercises",
            post(routes::exercises::log_exercise),
        )
        .route("/api/users/:user_id/logs", get(routes::logs::get_log))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_body() {
        let err = ApiError::Validation(ValidationError::InvalidNumber("duration"));
        assert_eq!(err.to_string(), "A numeric duration is required");
    }

    #[test]
    fn test_user_not_found_message() {
        let err = ApiError::UserNotFound("000000000000000000000000".to_string());
        assert_eq!(err.to_string(), "no user with id 000000000000000000000000");
    }

    #[test]
    fn test_storage_error_message_is_generic() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ApiError::Storage(StorageError::Io(io));
        assert_eq!(err.to_string(), "Server error");
    }
}
