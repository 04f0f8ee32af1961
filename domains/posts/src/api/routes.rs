//! Route definitions for Posts domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{comments, likes, posts};
use super::middleware::PostsState;

fn post_routes() -> Router<PostsState> {
    Router::new()
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
}

fn like_routes() -> Router<PostsState> {
    Router::new()
        .route("/api/posts/like/{id}", put(likes::like_post))
        .route("/api/posts/unlike/{id}", put(likes::unlike_post))
}

fn comment_routes() -> Router<PostsState> {
    Router::new()
        .route("/api/posts/comment/{id}", post(comments::add_comment))
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(comments::delete_comment),
        )
}

/// Create all Posts domain API routes
pub fn routes() -> Router<PostsState> {
    Router::new()
        .merge(post_routes())
        .merge(like_routes())
        .merge(comment_routes())
}
