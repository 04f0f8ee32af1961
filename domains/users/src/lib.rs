//! Users domain: credential store, registration, login

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{User, UserSummary};
pub use domain::gravatar::gravatar_url;
pub use domain::password::{hash_password, verify_password, PasswordError};

pub use repository::{CredentialStore, InMemoryUserStore, UserRepository};

pub use api::routes;
pub use api::{load_current_user, UsersState};
