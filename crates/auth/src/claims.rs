//! Token claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated subject embedded in a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubject {
    /// Credential store primary key
    pub id: String,
}

/// Claims carried by a bearer token
///
/// Serialized as `{"user": {"id": ...}, "iat": ..., "exp": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimSubject,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: impl Into<String>, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user: ClaimSubject { id: user_id.into() },
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Whether the token is expired at `now` (expiry instant itself counts as expired)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
