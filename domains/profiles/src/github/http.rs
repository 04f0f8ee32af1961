//! GitHub REST API client

use reqwest::Client;

use super::{GithubConfig, GithubError, GithubService, REPO_LIMIT};

/// GitHub requires a User-Agent on every request
const USER_AGENT: &str = "devlink";

pub struct HttpGithubService {
    client: Client,
    config: GithubConfig,
}

impl HttpGithubService {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=created&direction=desc",
            self.config.api_url.trim_end_matches('/'),
            username,
            REPO_LIMIT
        )
    }
}

#[async_trait::async_trait]
impl GithubService for HttpGithubService {
    async fn repos(&self, username: &str) -> Result<serde_json::Value, GithubError> {
        let url = self.repos_url(username);

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        tracing::debug!(username = %username, "Fetching GitHub repositories");

        let response = request
            .send()
            .await
            .map_err(|e| GithubError::Request(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!(
                username = %username,
                status = %response.status(),
                "GitHub lookup returned non-success status"
            );
            return Err(GithubError::NotFound);
        }

        response
            .json()
            .await
            .map_err(|e| GithubError::Request(format!("Failed to parse response: {}", e)))
    }
}
