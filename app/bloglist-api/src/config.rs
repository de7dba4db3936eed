//! Application Configuration
//!
//! Loaded once at startup from the environment. A `.env` file in the working
//! directory is read first when present.

use bloglist_auth::{AuthConfig, AuthError};
use std::env;

const DEFAULT_PORT: u16 = 3003;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port (from PORT env var)
    pub port: u16,

    /// PostgreSQL connection string (from DATABASE_URL env var). Without
    /// it the server keeps its data in memory.
    pub database_url: Option<String>,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Ok(Self {
            port,
            database_url,
            auth: AuthConfig::from_env()?,
        })
    }
}
