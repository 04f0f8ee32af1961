//! Comment handlers
//!
//! - POST /api/posts/comment/{id} - Comment on a post
//! - DELETE /api/posts/comment/{id}/{comment_id} - Delete own comment

use axum::{
    extract::{Path, State},
    Json,
};
use devlink_auth::{ensure_owner, AuthUser};
use devlink_common::{parse_id, Envelope, Result, ValidatedJson};
use devlink_users::load_current_user;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::find_post;
use crate::api::middleware::PostsState;
use crate::domain::entities::{Comment, PostError};

/// Request for commenting on a post
#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Add a comment
///
/// **POST /api/posts/comment/{id}**
pub async fn add_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> Result<Json<Envelope<Vec<Comment>>>> {
    let mut post = find_post(&state, &id).await?;
    let author = load_current_user(state.users.as_ref(), &ctx).await?;

    post.add_comment(Comment::new(&author.summary(), request.text));
    state.posts.save(&post).await?;

    Ok(Json(Envelope::ok(post.comments.0)))
}

/// Delete a comment
///
/// **DELETE /api/posts/comment/{id}/{comment_id}**
///
/// Post existence, then comment existence, then comment ownership.
pub async fn delete_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Envelope<Vec<Comment>>>> {
    let mut post = find_post(&state, &id).await?;

    let comment_not_found = PostError::CommentNotFound.to_string();
    let comment_id: Uuid = parse_id(&comment_id, &comment_not_found)?;

    let comment = post.comment(comment_id)?;
    ensure_owner(&comment.user_id.to_string(), &ctx)?;

    post.remove_comment(comment_id)?;
    state.posts.save(&post).await?;

    tracing::info!(post_id = %post.id, comment_id = %comment_id, "Comment deleted");

    Ok(Json(Envelope::ok(post.comments.0)))
}
