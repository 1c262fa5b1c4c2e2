use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::repo::GitHubRepo;
use super::types::Release;
use crate::error::WheelError;
use crate::http::HttpClient;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetRelease: Send + Sync {
    /// Fetch one release: the tagged one when `version` is given, else the latest.
    ///
    /// Failures are reported as [`WheelError::ReleaseFetch`].
    async fn get_release(&self, repo: &GitHubRepo, version: Option<String>) -> Result<Release>;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client: HttpClient::new(client),
            api_url,
        }
    }

    /// API URL of a release: `releases/tags/v{version}` or `releases/latest`.
    ///
    /// Leading `v`s on `version` are dropped before the single `v` is added back.
    pub fn release_url(api_url: &str, repo: &GitHubRepo, version: Option<&str>) -> String {
        match version {
            Some(version) => format!(
                "{}/repos/{}/{}/releases/tags/v{}",
                api_url,
                repo.owner,
                repo.repo,
                version.trim_start_matches('v')
            ),
            None => format!(
                "{}/repos/{}/{}/releases/latest",
                api_url, repo.owner, repo.repo
            ),
        }
    }
}

#[async_trait]
impl GetRelease for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_release(&self, repo: &GitHubRepo, version: Option<String>) -> Result<Release> {
        let url = GitHub::release_url(&self.api_url, repo, version.as_deref());

        debug!("Fetching release from {}...", url);

        self.http_client
            .get_json::<Release>(&url)
            .await
            .map_err(|cause| WheelError::ReleaseFetch { version, cause }.into())
    }
}
