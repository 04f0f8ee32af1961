//! Token issuance and verification

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issues and verifies HS256 bearer tokens.
///
/// Built once at startup from an immutable [`AuthConfig`] and shared by
/// cloning. Verification is a pure function of the token, the secret and
/// the supplied instant.
#[derive(Clone)]
pub struct TokenService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for `user_id`, valid for the configured lifetime from now
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user_id: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        if self.config.jwt_secret.is_empty() {
            tracing::error!("Token requested but no signing secret is configured");
            return Err(AuthError::Signing);
        }

        let expires_at = now
            .checked_add_signed(self.config.token_lifetime)
            .ok_or_else(|| {
                tracing::error!(
                    lifetime_secs = self.config.token_lifetime.num_seconds(),
                    "Token expiry is out of range"
                );
                AuthError::Signing
            })?;
        let claims = Claims::new(user_id, now, expires_at);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            AuthError::Signing
        })
    }

    /// Verify a token against the current wall clock
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// Fails with [`AuthError::InvalidToken`] when the signature does not
    /// verify or `now` is at or past the embedded expiry.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        if self.config.jwt_secret.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        // Expiry is checked below against the injected instant, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Token validation failed");
            AuthError::InvalidToken
        })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            tracing::debug!(user_id = %claims.user.id, exp = claims.exp, "Token expired");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}
