//! Authentication Configuration
//!
//! All configuration values are loaded from environment variables.
//! No hardcoded secrets or sensitive data.

use crate::error::AuthError;
use std::env;

/// Default lifetime of tokens issued by [`crate::AuthService::issue_token`]
const DEFAULT_TOKEN_EXPIRATION: i64 = 3600;

/// Authentication configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify tokens (from JWT_SECRET, or SECRET)
    pub jwt_secret: String,

    /// Lifetime in seconds of issued tokens (from JWT_EXPIRATION env var)
    pub token_expiration: i64,
}

impl AuthConfig {
    /// Build a configuration around an explicit secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_expiration: DEFAULT_TOKEN_EXPIRATION,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AuthError> {
        let jwt_secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("SECRET"))
            .map_err(|_| AuthError::Config("JWT_SECRET environment variable must be set".into()))?;

        let token_expiration = match env::var("JWT_EXPIRATION") {
            Ok(raw) => raw.parse().map_err(|_| {
                AuthError::Config(format!("JWT_EXPIRATION is not a number of seconds: {raw}"))
            })?,
            Err(_) => DEFAULT_TOKEN_EXPIRATION,
        };

        let config = Self {
            jwt_secret,
            token_expiration,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.jwt_secret.is_empty() {
            return Err(AuthError::Config("JWT_SECRET must not be empty".to_string()));
        }

        if self.jwt_secret.len() < 32 {
            tracing::warn!("JWT_SECRET is shorter than 32 characters");
        }

        if self.token_expiration <= 0 {
            return Err(AuthError::Config(
                "JWT_EXPIRATION must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
