//! Profile store: trait plus PostgreSQL and in-memory implementations

pub mod memory;
pub mod profiles;

use async_trait::async_trait;
use devlink_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::Profile;

pub use memory::InMemoryProfileStore;
pub use profiles::ProfileRepository;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepositoryError>;

    /// All profiles, oldest first
    async fn list(&self) -> Result<Vec<Profile>, RepositoryError>;

    /// Insert the profile, or replace the top-level fields of the user's
    /// existing one
    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError>;

    /// Persist the profile's experience and education entries
    async fn save(&self, profile: &Profile) -> Result<(), RepositoryError>;

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, RepositoryError>;
}
