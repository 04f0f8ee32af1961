//! Posts domain: posts, likes, comments

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{Comment, Like, Post, PostError};

pub use repository::{InMemoryPostStore, PostRepository, PostStore};

pub use api::routes;
pub use api::PostsState;
