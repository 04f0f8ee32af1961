//! Profiles domain state and token service integration

use std::sync::Arc;

use axum::extract::FromRef;
use devlink_auth::TokenService;
use devlink_posts::PostStore;
use devlink_users::CredentialStore;

use crate::github::GithubService;
use crate::repository::ProfileStore;

/// Application state for the Profiles domain
///
/// Holds the post and user stores as well, since deleting an account
/// removes the user's posts, profile and credentials together.
#[derive(Clone)]
pub struct ProfilesState {
    pub profiles: Arc<dyn ProfileStore>,
    pub posts: Arc<dyn PostStore>,
    pub users: Arc<dyn CredentialStore>,
    pub tokens: TokenService,
    pub github: Arc<dyn GithubService>,
}

impl FromRef<ProfilesState> for TokenService {
    fn from_ref(state: &ProfilesState) -> Self {
        state.tokens.clone()
    }
}
