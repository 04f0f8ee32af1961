//! Route definitions for Users domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::UsersState;

/// Create registration routes
fn user_routes() -> Router<UsersState> {
    Router::new().route("/api/users", post(users::register))
}

/// Create login and session routes
fn auth_routes() -> Router<UsersState> {
    Router::new().route("/api/auth", get(auth::current_user).post(auth::login))
}

/// Create all Users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new().merge(user_routes()).merge(auth_routes())
}
