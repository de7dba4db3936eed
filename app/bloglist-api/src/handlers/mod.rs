//! Bloglist API Handlers

pub mod blogs;

use crate::models::ApiError;
use crate::services::ServiceError;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Convert service errors to HTTP responses
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ServiceError::Auth(err) => return err.into_response(),
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ServiceError::NotOwner => (
                StatusCode::UNAUTHORIZED,
                "not_owner",
                ServiceError::NotOwner.to_string(),
            ),
            ServiceError::Store(err @ StoreError::LikesOverflow(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error", err.to_string())
            }
            ServiceError::Store(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        (status, Json(ApiError::new(error, &message))).into_response()
    }
}

/// Fallback for routes nobody handles
pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new("unknown_endpoint", "unknown endpoint")),
    )
}
