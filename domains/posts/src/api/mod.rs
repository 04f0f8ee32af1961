//! API layer for the Posts domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PostsState;
pub use routes::routes;
