//! HTTP handlers for the Posts domain

pub mod comments;
pub mod likes;
pub mod posts;

use devlink_common::{parse_id, Error, Result};
use uuid::Uuid;

use crate::api::middleware::PostsState;
use crate::domain::entities::Post;

pub(crate) const POST_NOT_FOUND: &str = "Post not found";

/// Load a post by its raw path id; malformed and unknown ids are both 404
pub(crate) async fn find_post(state: &PostsState, raw_id: &str) -> Result<Post> {
    let id: Uuid = parse_id(raw_id, POST_NOT_FOUND)?;

    state
        .posts
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(POST_NOT_FOUND.to_string()))
}
