//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenService: FromRef<S>`.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::gate::authenticate;
use crate::jwt::TokenService;

/// Authenticated user extractor.
///
/// Rejects with `MissingToken` or `InvalidToken` before the handler runs.
/// On success the context is also stored in the request extensions.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        let auth_context = authenticate(&parts.headers, &tokens)?;

        parts.extensions.insert(auth_context.clone());

        Ok(AuthUser(auth_context))
    }
}
