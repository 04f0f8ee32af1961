//! Mock GitHub service answering from canned repository listings

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{GithubError, GithubService};

/// Unknown usernames behave like a GitHub 404
#[derive(Default)]
pub struct MockGithubService {
    repos: Mutex<HashMap<String, serde_json::Value>>,
    requests: Mutex<Vec<String>>,
}

impl MockGithubService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listing returned for `username`
    pub fn with_repos(self, username: &str, repos: serde_json::Value) -> Self {
        self.repos.lock().insert(username.to_string(), repos);
        self
    }

    /// Usernames looked up so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl GithubService for MockGithubService {
    async fn repos(&self, username: &str) -> Result<serde_json::Value, GithubError> {
        self.requests.lock().push(username.to_string());

        self.repos
            .lock()
            .get(username)
            .cloned()
            .ok_or(GithubError::NotFound)
    }
}
