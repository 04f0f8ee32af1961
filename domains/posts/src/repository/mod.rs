//! Post store: trait plus PostgreSQL and in-memory implementations

pub mod memory;
pub mod posts;

use async_trait::async_trait;
use devlink_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::Post;

pub use memory::InMemoryPostStore;
pub use posts::PostRepository;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, post: &Post) -> Result<(), RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;

    /// All posts, newest first
    async fn list(&self) -> Result<Vec<Post>, RepositoryError>;

    /// Persist the post's likes and comments. `NotFound` if the post is gone.
    async fn save(&self, post: &Post) -> Result<(), RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Delete every post authored by `user_id`, returning how many were removed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, RepositoryError>;
}
