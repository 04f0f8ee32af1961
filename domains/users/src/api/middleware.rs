//! Users domain state and token service integration

use std::sync::Arc;

use axum::extract::FromRef;
use devlink_auth::{AuthContext, TokenService};
use devlink_common::{parse_id, Error, Result};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::repository::CredentialStore;

const NO_USER_FOUND: &str = "No user found";

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn CredentialStore>,
    pub tokens: TokenService,
}

impl FromRef<UsersState> for TokenService {
    fn from_ref(state: &UsersState) -> Self {
        state.tokens.clone()
    }
}

/// Resolve the authenticated caller to a stored user.
///
/// A token whose subject no longer exists (deleted account) or is not a
/// valid id answers 404 "No user found".
pub async fn load_current_user(store: &dyn CredentialStore, ctx: &AuthContext) -> Result<User> {
    let user_id: Uuid = parse_id(ctx.user_id(), NO_USER_FOUND)?;

    store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound(NO_USER_FOUND.to_string()))
}
