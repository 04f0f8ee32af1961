//! Post domain entities
//!
//! Likes and comments are embedded in their post and stored as JSON arrays.
//! New entries go to the front of their array.

use chrono::{DateTime, Utc};
use devlink_common::Error;
use devlink_users::UserSummary;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Rule violations when reacting to a post
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostError {
    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error("Comment does not exist")]
    CommentNotFound,
}

impl From<PostError> for Error {
    fn from(err: PostError) -> Self {
        match err {
            PostError::AlreadyLiked | PostError::NotLiked => Error::BadRequest(err.to_string()),
            PostError::CommentNotFound => Error::NotFound(err.to_string()),
        }
    }
}

/// A like: one per user per post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: Uuid,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &UserSummary, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    /// Author name and avatar at the time of posting
    pub name: String,
    pub avatar: String,
    pub likes: Json<Vec<Like>>,
    pub comments: Json<Vec<Comment>>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &UserSummary, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Json(Vec::new()),
            comments: Json(Vec::new()),
            created_at: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn like(&mut self, user_id: Uuid) -> Result<(), PostError> {
        if self.is_liked_by(user_id) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user_id });
        Ok(())
    }

    pub fn unlike(&mut self, user_id: Uuid) -> Result<(), PostError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user_id == user_id)
            .ok_or(PostError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn comment(&self, comment_id: Uuid) -> Result<&Comment, PostError> {
        self.comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or(PostError::CommentNotFound)
    }

    /// Remove exactly the comment with `comment_id`
    pub fn remove_comment(&mut self, comment_id: Uuid) -> Result<Comment, PostError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;
        Ok(self.comments.remove(index))
    }
}
