//! Route definitions for Profiles domain API

use axum::{
    routing::{delete, get, put},
    Router,
};

use super::handlers::{entries, github, profiles};
use super::middleware::ProfilesState;

fn profile_routes() -> Router<ProfilesState> {
    Router::new()
        .route(
            "/api/profile",
            get(profiles::list_profiles)
                .post(profiles::upsert_profile)
                .delete(profiles::delete_account),
        )
        .route("/api/profile/me", get(profiles::my_profile))
        .route("/api/profile/user/{user_id}", get(profiles::profile_by_user))
}

fn entry_routes() -> Router<ProfilesState> {
    Router::new()
        .route("/api/profile/experience", put(entries::add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            delete(entries::remove_experience),
        )
        .route("/api/profile/education", put(entries::add_education))
        .route(
            "/api/profile/education/{edu_id}",
            delete(entries::remove_education),
        )
}

fn github_routes() -> Router<ProfilesState> {
    Router::new().route("/api/profile/github/{username}", get(github::user_repos))
}

/// Create all Profiles domain API routes
pub fn routes() -> Router<ProfilesState> {
    Router::new()
        .merge(profile_routes())
        .merge(entry_routes())
        .merge(github_routes())
}
