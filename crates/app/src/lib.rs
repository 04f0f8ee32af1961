//! Devlink application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use devlink_auth::{AuthConfig, TokenService};
use devlink_common::config::Config;
use devlink_posts::{InMemoryPostStore, PostRepository, PostStore, PostsState};
use devlink_profiles::{
    GithubConfig, GithubService, HttpGithubService, InMemoryProfileStore, ProfileRepository,
    ProfileStore, ProfilesState,
};
use devlink_users::{CredentialStore, InMemoryUserStore, UserRepository, UsersState};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Store handles shared by every domain
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn CredentialStore>,
    pub posts: Arc<dyn PostStore>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl Stores {
    /// Volatile stores; nothing survives a restart
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            posts: Arc::new(InMemoryPostStore::new()),
            profiles: Arc::new(InMemoryProfileStore::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            posts: Arc::new(PostRepository::new(pool.clone())),
            profiles: Arc::new(ProfileRepository::new(pool)),
        }
    }
}

/// Connect to PostgreSQL and apply pending migrations
pub async fn connect(database_url: &str) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("../../migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

/// Build the router from already-constructed collaborators
pub fn router(tokens: TokenService, stores: Stores, github: Arc<dyn GithubService>) -> Router {
    let users_state = UsersState {
        users: stores.users.clone(),
        tokens: tokens.clone(),
    };

    let posts_state = PostsState {
        posts: stores.posts.clone(),
        users: stores.users.clone(),
        tokens: tokens.clone(),
    };

    let profiles_state = ProfilesState {
        profiles: stores.profiles,
        posts: stores.posts,
        users: stores.users,
        tokens,
        github,
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Devlink API running" }))
        .merge(devlink_users::routes().with_state(users_state))
        .merge(devlink_posts::routes().with_state(posts_state))
        .merge(devlink_profiles::routes().with_state(profiles_state))
}

/// Create the main application router from configuration
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::new(
        config.jwt_secret.clone(),
        chrono::Duration::seconds(config.jwt_lifetime_secs),
    );
    let tokens = TokenService::new(auth_config);

    let stores = match &config.database_url {
        Some(url) => Stores::postgres(connect(url).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, running on in-memory stores");
            Stores::in_memory()
        }
    };

    let mut github_config = GithubConfig::new(config.github_api_url.clone());
    if let (Some(id), Some(secret)) = (&config.github_client_id, &config.github_client_secret) {
        github_config = github_config.with_credentials(id.clone(), secret.clone());
    }
    let github: Arc<dyn GithubService> = Arc::new(HttpGithubService::new(github_config));

    Ok(router(tokens, stores, github))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
