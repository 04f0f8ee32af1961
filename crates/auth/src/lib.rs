//! Authentication for the Devlink API
//!
//! Provides the token service (issue/verify signed bearer tokens), the auth
//! gate that turns an `Authorization` header into an [`AuthContext`], the
//! ownership check used before mutating a resource, and the axum extractor
//! that works with any state implementing `FromRef<S>` for [`TokenService`].

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod gate;
mod jwt;
mod ownership;

pub use claims::{ClaimSubject, Claims};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use gate::{authenticate, extract_bearer_token, BEARER_PREFIX};
pub use jwt::TokenService;
pub use ownership::{ensure_owner, is_owner};
