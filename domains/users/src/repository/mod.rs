//! Credential store: trait plus PostgreSQL and in-memory implementations

pub mod memory;
pub mod users;

use async_trait::async_trait;
use devlink_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::User;

pub use memory::InMemoryUserStore;
pub use users::UserRepository;

/// Persisted user records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Lookup by (lower-cased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user. Fails with `AlreadyExists` when the email is taken.
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
