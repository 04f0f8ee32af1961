//! Auth gate: resolves the caller's identity from request headers

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::TokenService;

/// Required scheme prefix of the `Authorization` header, single space included
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from the `Authorization` header.
///
/// The token is the first whitespace-delimited segment after the prefix.
/// Anything that does not yield a non-empty token is treated as absent.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MissingToken)?;

    let rest = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MissingToken)?;

    // "Bearer  abc" has an empty first segment
    match rest.split(' ').next() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}

/// Authenticate a request: read the bearer token and verify it
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthContext, AuthError> {
    let token = extract_bearer_token(headers)?;
    let claims = tokens.verify(token)?;

    tracing::debug!(user_id = %claims.user_id(), "Request authenticated");

    Ok(AuthContext::from(claims))
}
