//! Login and session handlers
//!
//! - POST /api/auth - Exchange credentials for a token
//! - GET /api/auth - Current user

use axum::{extract::State, Json};
use devlink_auth::AuthUser;
use devlink_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::{load_current_user, UsersState};
use crate::domain::entities::User;
use crate::domain::password::verify_password;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Log in
///
/// **POST /api/auth**
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::BadRequest(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(&user.password_hash, &request.password) {
        tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
        return Err(Error::BadRequest(INVALID_CREDENTIALS.to_string()));
    }

    let token = state.tokens.issue(&user.id.to_string())?;

    Ok(Json(TokenResponse { token }))
}

/// Get the authenticated user
///
/// **GET /api/auth**
pub async fn current_user(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
) -> Result<Json<User>> {
    let user = load_current_user(state.users.as_ref(), &ctx).await?;
    Ok(Json(user))
}
