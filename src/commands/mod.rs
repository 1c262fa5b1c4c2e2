use anyhow::Result;

use crate::{platform::DefaultPlatformDetector, runtime::Runtime};

pub mod config;
mod download;
mod list;

pub use download::{FetchOptions, run};
pub use list::{list_platforms, platform_listing};

use config::Config;

/// Entry point used by the CLI: real GitHub client, compile-time platform detection.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn fetch<R: Runtime>(
    runtime: R,
    options: FetchOptions,
    api_url: Option<String>,
) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    run(options, &config, &DefaultPlatformDetector).await
}
