//! Profiles domain: profiles, experience, education, GitHub repositories,
//! account deletion

pub mod api;
pub mod domain;
pub mod github;
pub mod repository;

pub use domain::entities::{
    parse_skills, Education, Experience, Profile, ProfileError, ProfileFields, Social,
};

pub use github::{
    http::HttpGithubService, mock::MockGithubService, GithubConfig, GithubError, GithubService,
};
pub use repository::{InMemoryProfileStore, ProfileRepository, ProfileStore};

pub use api::routes;
pub use api::ProfilesState;
