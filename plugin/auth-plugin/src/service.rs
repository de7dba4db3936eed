//! Authentication Service
//!
//! Token verification and issuance. The service holds the signing keys
//! derived from [`AuthConfig`] and is shared across requests behind an `Arc`.

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::TokenClaims;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Authentication service
pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // `exp` is checked when present but not required.
        let mut validation = Validation::new(ALGORITHM);
        validation.required_spec_claims.clear();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Get reference to config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify a bearer token and return its claims
    ///
    /// Fails with [`AuthError::InvalidToken`] when the signature, format or
    /// expiry check fails, or when the claims carry no subject id.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;

        if token_data.claims.id.is_none() {
            tracing::debug!("Token verified but carries no subject id");
            return Err(AuthError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Issue a signed token for a user
    pub fn issue_token(&self, user_id: Uuid, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.token_expiration);

        let claims = TokenClaims {
            id: Some(user_id),
            username: Some(username.to_string()),
            iat: Some(now.timestamp()),
            exp: Some(exp.timestamp()),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            AuthError::Internal
        })
    }
}
