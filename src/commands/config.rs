use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::{
    github::{GetRelease, GitHub},
    http::HttpClient,
    runtime::Runtime,
};

/// User agent sent with every request; GitHub rejects anonymous requests without one.
pub const USER_AGENT: &str = concat!("clang-wheel/", env!("CLANG_WHEEL_VERSION"));

pub struct Config<R: Runtime, G: GetRelease> {
    pub runtime: R,
    pub github: G,
    pub http_client: HttpClient,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, api_url: Option<String>) -> Result<Self> {
        debug!("Building HTTP client with user agent {}", USER_AGENT);

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let github = GitHub::new(client.clone(), api_url);
        let http_client = HttpClient::new(client);

        Ok(Self {
            runtime,
            github,
            http_client,
        })
    }
}
