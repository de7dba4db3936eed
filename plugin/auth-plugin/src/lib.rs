//! Bloglist Authentication
//!
//! Bearer token verification for the bloglist API:
//! - HS256 token verification against a shared secret
//! - Token issuance for accounts managed by another service
//! - Middleware that lifts the bearer token into request extensions
//! - An axum extractor yielding the authenticated caller
//!
//! # Configuration
//!
//! All configuration is loaded from environment variables:
//! - `JWT_SECRET` - Secret key for verifying JWTs (required; `SECRET` is accepted too)
//! - `JWT_EXPIRATION` - Lifetime of issued tokens in seconds (default: 3600)
//!
//! # Usage
//!
//! ```rust,ignore
//! use bloglist_auth::{AuthConfig, AuthService, AuthUser};
//!
//! let auth = Arc::new(AuthService::new(AuthConfig::from_env()?));
//!
//! async fn handler(user: AuthUser) -> String {
//!     user.id.to_string()
//! }
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod models;
pub mod service;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use models::{BearerToken, TokenClaims};
pub use service::AuthService;
