//! In-memory post store for tests and database-less local runs

use async_trait::async_trait;
use devlink_common::RepositoryError;
use parking_lot::Mutex;
use uuid::Uuid;

use super::PostStore;
use crate::domain::entities::Post;

/// Posts kept in insertion order
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, post: &Post) -> Result<(), RepositoryError> {
        let mut posts = self.posts.lock();
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        posts.push(post.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        // Later insertions win ties on created_at
        let mut posts: Vec<Post> = self.posts.lock().iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn save(&self, post: &Post) -> Result<(), RepositoryError> {
        let mut posts = self.posts.lock();
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.likes = post.likes.clone();
        stored.comments = post.comments.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut posts = self.posts.lock();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let mut posts = self.posts.lock();
        let before = posts.len();
        posts.retain(|p| p.user_id != user_id);
        Ok((before - posts.len()) as u64)
    }
}
