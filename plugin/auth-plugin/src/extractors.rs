//! Authentication Extractors

use crate::error::AuthError;
use crate::middleware::bearer_token;
use crate::models::BearerToken;
use crate::service::AuthService;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use uuid::Uuid;

/// Authenticated caller, resolved from a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Prefer the token stored by the middleware, fall back to the header
        let token = match parts.extensions.get::<BearerToken>() {
            Some(token) => token.clone(),
            None => bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?,
        };

        let auth = Arc::<AuthService>::from_ref(state);
        let claims = auth.verify(token.as_str())?;
        let id = claims.id.ok_or(AuthError::InvalidToken)?;

        Ok(AuthUser {
            id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::middleware::extract_token;

    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app(auth: Arc<AuthService>) -> Router {
        Router::new()
            .route(
                "/me",
                get(|user: AuthUser| async move { user.id.to_string() }),
            )
            .layer(middleware::from_fn(extract_token))
            .with_state(auth)
    }

    fn auth() -> Arc<AuthService> {
        Arc::new(AuthService::new(AuthConfig::new(
            "extractor-test-secret-0123456789abcdef",
        )))
    }

    #[tokio::test]
    async fn test_valid_token_is_accepted() {
        let auth = auth();
        let user_id = Uuid::new_v4();
        let token = auth.issue_token(user_id, "hellas").unwrap();

        let response = app(auth)
            .oneshot(
                Request::get("/me")
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let response = app(auth())
            .oneshot(Request::get("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let response = app(auth())
            .oneshot(
                Request::get("/me")
                    .header(AUTHORIZATION, "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
