//! HTTP handlers for the Profiles domain

pub mod entries;
pub mod github;
pub mod profiles;

use devlink_auth::AuthContext;
use devlink_common::{Error, Result};
use devlink_users::UserSummary;
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::ProfilesState;
use crate::domain::entities::Profile;

pub(crate) const NO_PROFILE: &str = "There is no profile for this user";

/// Profile with its owner's public details
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: Option<UserSummary>,
}

impl ProfileResponse {
    /// Attach the owner's summary. A missing owner is rendered as `null`.
    pub(crate) async fn load(state: &ProfilesState, profile: Profile) -> Result<Self> {
        let user = state
            .users
            .find_by_id(profile.user_id)
            .await?
            .map(|u| u.summary());

        Ok(Self { profile, user })
    }
}

/// The caller's own profile, or 400 when they have none
pub(crate) async fn caller_profile(state: &ProfilesState, ctx: &AuthContext) -> Result<Profile> {
    let no_profile = || Error::BadRequest(NO_PROFILE.to_string());

    let user_id: Uuid = ctx.user_id().parse().map_err(|_| no_profile())?;

    state
        .profiles
        .find_by_user(user_id)
        .await?
        .ok_or_else(no_profile)
}

/// Treat blank optional strings as absent
pub(crate) fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
