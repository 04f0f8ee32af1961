//! GitHub repositories handler
//!
//! - GET /api/profile/github/{username}

use axum::{
    extract::{Path, State},
    Json,
};
use devlink_common::Result;
use serde_json::Value;

use crate::api::middleware::ProfilesState;
use crate::github::GithubError;

/// GitHub logins are alphanumeric with single inner hyphens, at most 39 chars
fn is_plausible_login(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 39
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !username.starts_with('-')
        && !username.ends_with('-')
}

/// List a GitHub user's five most recently created public repositories
///
/// **GET /api/profile/github/{username}**
pub async fn user_repos(
    State(state): State<ProfilesState>,
    Path(username): Path<String>,
) -> Result<Json<Value>> {
    if !is_plausible_login(&username) {
        return Err(GithubError::NotFound.into());
    }

    let repos = state.github.repos(&username).await?;
    Ok(Json(repos))
}
