//! Authentication Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token missing or invalid")]
    MissingToken,

    #[error("token missing or invalid")]
    InvalidToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error")]
    Internal,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Config(_) | AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (error_code, message) = match &self {
            AuthError::MissingToken | AuthError::InvalidToken => {
                ("invalid_token", self.to_string())
            }
            AuthError::Config(msg) => {
                tracing::error!("Authentication misconfigured: {}", msg);
                ("configuration_error", "Server configuration error".to_string())
            }
            AuthError::Internal => ("internal_error", "An internal error occurred".to_string()),
        };

        (
            self.status(),
            Json(serde_json::json!({
                "error": error_code,
                "message": message
            })),
        )
            .into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!("JWT error: {:?}", err);
        AuthError::InvalidToken
    }
}
