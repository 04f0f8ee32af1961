//! Registration handler
//!
//! - POST /api/users - Register a new user and sign them in

use axum::{extract::State, http::StatusCode, Json};
use devlink_common::{not_blank, Error, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::domain::entities::User;
use crate::domain::gravatar::gravatar_url;
use crate::domain::password::hash_password;

const USER_EXISTS: &str = "User already exists";

/// Request for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Newly registered user plus a token for immediate use
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    pub token: String,
}

/// Register a user
///
/// **POST /api/users**
///
/// Emails are unique (case-insensitive). The avatar is the Gravatar for the
/// email address.
pub async fn register(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    if state.users.find_by_email(&request.email).await?.is_some() {
        return Err(Error::BadRequest(USER_EXISTS.to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = User::new(
        request.name.trim().to_string(),
        &request.email,
        password_hash,
        gravatar_url(&request.email),
    );

    state.users.insert(&user).await.map_err(|e| match e {
        // Lost a race with a concurrent registration for the same email
        RepositoryError::AlreadyExists => Error::BadRequest(USER_EXISTS.to_string()),
        other => other.into(),
    })?;

    let token = state.tokens.issue(&user.id.to_string())?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(RegisterResponse { user, token })))
}
