//! Experience and education handlers
//!
//! - PUT /api/profile/experience
//! - DELETE /api/profile/experience/{exp_id}
//! - PUT /api/profile/education
//! - DELETE /api/profile/education/{edu_id}

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use devlink_auth::AuthUser;
use devlink_common::{not_blank, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{caller_profile, provided, ProfileResponse};
use crate::api::middleware::ProfilesState;
use crate::domain::entities::{Education, Experience, ProfileError};

/// Request for adding an experience entry
#[derive(Debug, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: String,

    pub location: Option<String>,

    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,

    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

/// Request for adding an education entry
#[derive(Debug, Deserialize, Validate)]
pub struct EducationRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "School is required"))]
    pub school: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Degree is required"))]
    pub degree: String,

    #[serde(default, alias = "fieldOfStudy")]
    #[validate(custom(function = "not_blank", message = "Field of study is required"))]
    pub field_of_study: String,

    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,

    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

/// Confirmation returned after removing an entry
#[derive(Debug, Serialize)]
pub struct RecordUpdatedResponse {
    pub msg: &'static str,
    pub profile: ProfileResponse,
}

fn required_date(date: Option<NaiveDate>) -> Result<NaiveDate> {
    date.ok_or_else(|| Error::Validation("From date is required".to_string()))
}

fn parse_entry_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .map_err(|_| ProfileError::RecordNotFound.into())
}

/// Add an experience entry to the front of the caller's list
///
/// **PUT /api/profile/experience**
pub async fn add_experience(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
    ValidatedJson(request): ValidatedJson<ExperienceRequest>,
) -> Result<Json<ProfileResponse>> {
    let mut profile = caller_profile(&state, &ctx).await?;

    profile.add_experience(Experience {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        company: request.company.trim().to_string(),
        location: provided(request.location),
        from: required_date(request.from)?,
        to: request.to,
        current: request.current,
        description: provided(request.description),
    });
    state.profiles.save(&profile).await?;

    Ok(Json(ProfileResponse::load(&state, profile).await?))
}

/// Remove an experience entry
///
/// **DELETE /api/profile/experience/{exp_id}**
pub async fn remove_experience(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
    Path(exp_id): Path<String>,
) -> Result<Json<RecordUpdatedResponse>> {
    let mut profile = caller_profile(&state, &ctx).await?;

    profile.remove_experience(parse_entry_id(&exp_id)?)?;
    state.profiles.save(&profile).await?;

    Ok(Json(RecordUpdatedResponse {
        msg: "Record updated",
        profile: ProfileResponse::load(&state, profile).await?,
    }))
}

/// Add an education entry to the front of the caller's list
///
/// **PUT /api/profile/education**
pub async fn add_education(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
    ValidatedJson(request): ValidatedJson<EducationRequest>,
) -> Result<Json<ProfileResponse>> {
    let mut profile = caller_profile(&state, &ctx).await?;

    profile.add_education(Education {
        id: Uuid::new_v4(),
        school: request.school.trim().to_string(),
        degree: request.degree.trim().to_string(),
        field_of_study: request.field_of_study.trim().to_string(),
        from: required_date(request.from)?,
        to: request.to,
        current: request.current,
        description: provided(request.description),
    });
    state.profiles.save(&profile).await?;

    Ok(Json(ProfileResponse::load(&state, profile).await?))
}

/// Remove an education entry
///
/// **DELETE /api/profile/education/{edu_id}**
pub async fn remove_education(
    AuthUser(ctx): AuthUser,
    State(state): State<ProfilesState>,
    Path(edu_id): Path<String>,
) -> Result<Json<RecordUpdatedResponse>> {
    let mut profile = caller_profile(&state, &ctx).await?;

    profile.remove_education(parse_entry_id(&edu_id)?)?;
    state.profiles.save(&profile).await?;

    Ok(Json(RecordUpdatedResponse {
        msg: "Record updated",
        profile: ProfileResponse::load(&state, profile).await?,
    }))
}
