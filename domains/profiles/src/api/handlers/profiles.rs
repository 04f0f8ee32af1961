//! Profile handlers
//!
//! - GET /api/profile/me - Caller's profile
//! - GET /api/profile - All profiles
//! - GET /api/profile/user/{user_id} - Profile by user id
//! - POST /api/profile - Create or update caller's profile
//! - DELETE /api/profile - Delete caller's account

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use devlink_auth::AuthUser;
use devlink_common::{not_blank, parse_id, Error, Result, ValidatedJson};
use devlink_users::load_current_user;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use super::{caller_profile, provided, ProfileResponse};
use crate::api::middleware::ProfilesState;
use crate::domain::entities::{parse_skills, Profile, ProfileFields, Social};

const PROFILE_NOT_FOUND: &str = "Profile not found";
const SKILLS_REQUIRED: &str = "Skills is required";

/// Request for creating or updating a profile
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Status is required"))]
    pub status: String,

    /// Comma-separated list
    #[serde(default)]
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,

    #[serde(alias = "githubusername")]
    pub github_username: Option<String>,

    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileRequest {
    fn into_fields(self) -> Result<ProfileFields> {
        let skills = parse_skills(&self.skills);
        if skills.is_empty() {
            return Err(Error::Validation(SKILLS_REQUIRED.to_string()));
        }

        Ok(ProfileFields {
            company: provided(self.company),
            website: provided(self.website),
            location: provided(self.location),
            status: self.status.trim().to_string(),
            skills,
            bio: provided(self.bio),
            github_username: provided(self.github_username),
            social: Social {
                youtube: provided(self.youtube),
                twitter: provided(self.twitter),
                facebook: provided(self.facebook),
                linkedin: provided(self.linkedin),
                instagram: provided(self.instagram),
            },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub count: usize,
    pub data: Vec<ProfileResponse>,
}

/// Get the caller's profile
///
/// **GET /api/profile/me**
pub async fn my_profile(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
) -> Result<Json<ProfileResponse>> {
    let profile = caller_profile(&state, &ctx).await?;
    Ok(Json(ProfileResponse::load(&state, profile).await?))
}

/// List all profiles
///
/// **GET /api/profile**
pub async fn list_profiles(State(state): State<ProfilesState>) -> Result<Json<ProfileListResponse>> {
    let profiles = state.profiles.list().await?;

    let mut data = Vec::with_capacity(profiles.len());
    for profile in profiles {
        data.push(ProfileResponse::load(&state, profile).await?);
    }

    Ok(Json(ProfileListResponse {
        count: data.len(),
        data,
    }))
}

/// Get a profile by its owner's id
///
/// **GET /api/profile/user/{user_id}**
pub async fn profile_by_user(
    State(state): State<ProfilesState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let not_found = || Error::BadRequest(PROFILE_NOT_FOUND.to_string());

    let user_id: Uuid = user_id.parse().map_err(|_| not_found())?;
    let profile = state
        .profiles
        .find_by_user(user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(ProfileResponse::load(&state, profile).await?))
}

/// Create or update the caller's profile
///
/// **POST /api/profile**
///
/// 201 when the profile is created, 200 when an existing one is updated.
pub async fn upsert_profile(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
    ValidatedJson(request): ValidatedJson<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    let fields = request.into_fields()?;
    let owner = load_current_user(state.users.as_ref(), &ctx).await?;

    let (profile, status) = match state.profiles.find_by_user(owner.id).await? {
        Some(mut existing) => {
            existing.apply(fields);
            (existing, StatusCode::OK)
        }
        None => (Profile::new(owner.id, fields), StatusCode::CREATED),
    };

    state.profiles.upsert(&profile).await?;

    let created = status == StatusCode::CREATED;
    tracing::info!(user_id = %owner.id, created, "Profile saved");

    Ok((
        status,
        Json(ProfileResponse {
            profile,
            user: Some(owner.summary()),
        }),
    ))
}

/// Delete the caller's account
///
/// **DELETE /api/profile**
///
/// Removes the caller's posts, then their profile, then the user record.
pub async fn delete_account(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
) -> Result<Json<Value>> {
    let user_id: Uuid = parse_id(ctx.user_id(), "No user found")?;

    let posts_removed = state.posts.delete_by_user(user_id).await?;
    state.profiles.delete_by_user(user_id).await?;
    state.users.delete(user_id).await?;

    tracing::info!(user_id = %user_id, posts_removed, "Account deleted");

    Ok(Json(json!({ "msg": "User deleted" })))
}
