//! Ownership check applied before mutating or deleting a resource

use crate::context::AuthContext;
use crate::error::AuthError;

/// Exact string equality of the stored owner id and the caller's id
pub fn is_owner(resource_owner_id: &str, authenticated_user_id: &str) -> bool {
    resource_owner_id == authenticated_user_id
}

/// Fail with [`AuthError::NotAuthorized`] unless the caller owns the resource
pub fn ensure_owner(resource_owner_id: &str, ctx: &AuthContext) -> Result<(), AuthError> {
    if is_owner(resource_owner_id, ctx.user_id()) {
        Ok(())
    } else {
        tracing::debug!(
            owner = %resource_owner_id,
            caller = %ctx.user_id(),
            "Ownership check failed"
        );
        Err(AuthError::NotAuthorized)
    }
}
