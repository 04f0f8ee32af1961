//! GitHub public repository lookup
//!
//! - [`http::HttpGithubService`] calls the GitHub REST API
//! - [`mock::MockGithubService`] answers from canned data for tests and
//!   offline development

pub mod http;
pub mod mock;

use devlink_common::Error;
use thiserror::Error;

/// Public API endpoint used when none is configured
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of repositories returned per lookup
pub const REPO_LIMIT: u32 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GithubError {
    /// GitHub answered with a non-success status (unknown user and the like)
    #[error("No github profile found")]
    NotFound,

    #[error("GitHub request failed: {0}")]
    Request(String),
}

impl From<GithubError> for Error {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::NotFound => Error::BadRequest(err.to_string()),
            GithubError::Request(msg) => Error::Upstream(msg),
        }
    }
}

/// GitHub API access settings
#[derive(Clone)]
pub struct GithubConfig {
    pub api_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl GithubConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client_id: None,
            client_secret: None,
        }
    }

    pub fn with_credentials(mut self, client_id: String, client_secret: String) -> Self {
        self.client_id = Some(client_id);
        self.client_secret = Some(client_secret);
        self
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Source of a user's public repositories
#[async_trait::async_trait]
pub trait GithubService: Send + Sync {
    /// The user's most recently created public repositories, as returned by
    /// GitHub
    async fn repos(&self, username: &str) -> Result<serde_json::Value, GithubError>;
}
