//! API layer for the Profiles domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ProfilesState;
pub use routes::routes;
