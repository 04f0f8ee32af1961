//! Authentication configuration

use chrono::Duration;

/// Default token lifetime: 100 hours
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 360_000;

/// Authentication configuration, built once at startup and read-only afterwards
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_lifetime: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, token_lifetime: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_lifetime,
        }
    }

    /// Config with the default 100 hour lifetime
    pub fn with_default_lifetime(jwt_secret: impl Into<String>) -> Self {
        Self::new(
            jwt_secret,
            Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS),
        )
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}
