//! Post handlers
//!
//! - POST /api/posts - Create a post
//! - GET /api/posts - List posts
//! - GET /api/posts/{id} - Get a post
//! - DELETE /api/posts/{id} - Delete own post

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use devlink_auth::{ensure_owner, AuthUser};
use devlink_common::{Envelope, Result, ValidatedJson};
use devlink_users::load_current_user;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use super::find_post;
use crate::api::middleware::PostsState;
use crate::domain::entities::Post;

/// Request for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Create a post
///
/// **POST /api/posts**
///
/// Author name and avatar are copied from the caller's account.
pub async fn create_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Envelope<Post>>)> {
    let author = load_current_user(state.users.as_ref(), &ctx).await?;

    let post = Post::new(&author.summary(), request.text);
    state.posts.create(&post).await?;

    tracing::info!(post_id = %post.id, user_id = %author.id, "Post created");

    Ok((StatusCode::CREATED, Json(Envelope::ok(post))))
}

/// List all posts, newest first
///
/// **GET /api/posts**
pub async fn list_posts(
    AuthUser(_ctx): AuthUser,
    State(state): State<PostsState>,
) -> Result<Json<Envelope<Vec<Post>>>> {
    let posts = state.posts.list().await?;
    Ok(Json(Envelope::ok(posts)))
}

/// Get a post
///
/// **GET /api/posts/{id}**
pub async fn get_post(
    AuthUser(_ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Post>>> {
    let post = find_post(&state, &id).await?;
    Ok(Json(Envelope::ok(post)))
}

/// Delete a post
///
/// **DELETE /api/posts/{id}**
///
/// Only the author may delete. Existence is checked before ownership.
pub async fn delete_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Value>>> {
    let post = find_post(&state, &id).await?;

    ensure_owner(&post.user_id.to_string(), &ctx)?;

    state.posts.delete(post.id).await?;

    tracing::info!(post_id = %post.id, user_id = %ctx.user_id(), "Post deleted");

    Ok(Json(Envelope::ok(json!({})).with_msg("Post deleted")))
}
