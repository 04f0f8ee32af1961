//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file) once at startup and then passed around by value.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default token lifetime: 100 hours
pub const DEFAULT_JWT_LIFETIME_SECS: i64 = 360_000;

/// Upper bound on the token lifetime: 10 years
pub const MAX_JWT_LIFETIME_SECS: i64 = 315_360_000;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL. Without it the server runs on in-memory stores.
    pub database_url: Option<String>,

    /// Token signing
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_lifetime_secs: i64,

    /// GitHub API access for profile repository listings
    pub github_api_url: String,
    pub github_client_id: Option<String>,
    #[serde(skip_serializing)]
    pub github_client_secret: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let jwt_lifetime_secs = match lookup("JWT_LIFETIME_SECS") {
            Some(raw) => {
                let secs: i64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("JWT_LIFETIME_SECS must be an integer"))?;
                if secs <= 0 {
                    anyhow::bail!("JWT_LIFETIME_SECS must be positive");
                }
                if secs > MAX_JWT_LIFETIME_SECS {
                    anyhow::bail!(
                        "JWT_LIFETIME_SECS must be at most {}",
                        MAX_JWT_LIFETIME_SECS
                    );
                }
                secs
            }
            None => DEFAULT_JWT_LIFETIME_SECS,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            jwt_secret,
            jwt_lifetime_secs,
            github_api_url: lookup("GITHUB_API_URL")
                .unwrap_or_else(|| "https://api.github.com".to_string()),
            github_client_id: lookup("GITHUB_CLIENT_ID"),
            github_client_secret: lookup("GITHUB_CLIENT_SECRET"),
            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "devlink=debug,tower_http=info".to_string()),
            log_format,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "[redacted]"))
            .field("jwt_secret", &"[redacted]")
            .field("jwt_lifetime_secs", &self.jwt_lifetime_secs)
            .field("github_api_url", &self.github_api_url)
            .field("github_client_id", &self.github_client_id)
            .field(
                "github_client_secret",
                &self.github_client_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("rust_log", &self.rust_log)
            .field("log_format", &self.log_format)
            .field("port", &self.port)
            .finish()
    }
}
