//! Like handlers
//!
//! - PUT /api/posts/like/{id}
//! - PUT /api/posts/unlike/{id}

use axum::{
    extract::{Path, State},
    Json,
};
use devlink_auth::AuthUser;
use devlink_common::{parse_id, Envelope, Result};
use uuid::Uuid;

use super::find_post;
use crate::api::middleware::PostsState;
use crate::domain::entities::Like;

/// Like a post, at most once per user
///
/// **PUT /api/posts/like/{id}**
pub async fn like_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Like>>>> {
    let mut post = find_post(&state, &id).await?;
    let user_id: Uuid = parse_id(ctx.user_id(), "No user found")?;

    post.like(user_id)?;
    state.posts.save(&post).await?;

    Ok(Json(Envelope::ok(post.likes.0)))
}

/// Remove the caller's like
///
/// **PUT /api/posts/unlike/{id}**
pub async fn unlike_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Like>>>> {
    let mut post = find_post(&state, &id).await?;
    let user_id: Uuid = parse_id(ctx.user_id(), "No user found")?;

    post.unlike(user_id)?;
    state.posts.save(&post).await?;

    Ok(Json(Envelope::ok(post.likes.0)))
}
