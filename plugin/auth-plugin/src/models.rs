//! Token Models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decoded bearer token payload
///
/// Every field is optional on the wire: tokens minted by the account service
/// carry only `username` and `id`, while tokens issued here also carry
/// `iat` and `exp`. A token whose claims lack `id` is rejected at
/// verification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: id of the user the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Raw bearer credential attached to a request by
/// [`crate::middleware::extract_token`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
