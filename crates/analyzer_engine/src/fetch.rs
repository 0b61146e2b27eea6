use std::time::Duration;

use crate::{FailureKind, FetchError, Repository};

/// Connection parameters for the repository listing endpoint.
///
/// `base_url` is overridable so tests can point at a mock server; production
/// uses the default.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub per_page: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            per_page: 100,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait RepoFetcher: Send + Sync {
    /// Lists the public repositories of `identifier`, preserving API order.
    ///
    /// The identifier must already be trimmed and non-empty; validating it is
    /// the caller's job, not the fetcher's.
    async fn fetch_repositories(&self, identifier: &str) -> Result<Vec<Repository>, FetchError>;
}

/// Fetcher backed by the real GitHub listing endpoint. Single page, no
/// retries, no auth; timeouts come from [`FetchSettings`].
#[derive(Debug, Clone)]
pub struct GithubFetcher {
    settings: FetchSettings,
}

impl GithubFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn listing_url(&self, identifier: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.settings.base_url, identifier, self.settings.per_page
        )
    }
}

#[async_trait::async_trait]
impl RepoFetcher for GithubFetcher {
    async fn fetch_repositories(&self, identifier: &str) -> Result<Vec<Repository>, FetchError> {
        let client = self.build_client()?;

        let response = client
            .get(self.listing_url(identifier))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("GitHub API Error: {}", status.as_u16()),
            ));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice::<Vec<Repository>>(&body)
            .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
