//! Posts domain state and token service integration

use std::sync::Arc;

use axum::extract::FromRef;
use devlink_auth::TokenService;
use devlink_users::CredentialStore;

use crate::repository::PostStore;

/// Application state for the Posts domain
#[derive(Clone)]
pub struct PostsState {
    pub posts: Arc<dyn PostStore>,
    /// Author name and avatar are read from here when posting or commenting
    pub users: Arc<dyn CredentialStore>,
    pub tokens: TokenService,
}

impl FromRef<PostsState> for TokenService {
    fn from_ref(state: &PostsState) -> Self {
        state.tokens.clone()
    }
}
