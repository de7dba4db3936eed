//! Authentication Middleware
//!
//! Pulls the bearer credential out of the Authorization header and stores it
//! in request extensions, where the [`crate::AuthUser`] extractor picks it up.

use crate::models::BearerToken;

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Any other scheme, or an empty
/// token, yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<BearerToken> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(BearerToken(token.to_string()))
}

/// Attach the request's bearer token, if any, to its extensions
///
/// Never rejects: routes that require a token enforce it through the
/// extractor.
pub async fn extract_token(mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(req.headers()) {
        req.extensions_mut().insert(token);
    }

    next.run(req).await
}
