//! API layer for the Users domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::{load_current_user, UsersState};
pub use routes::routes;
