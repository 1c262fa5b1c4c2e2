use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    asset::find_wheel_asset,
    download::download_wheel,
    error::WheelError,
    github::{GetRelease, GitHubRepo},
    platform::{PlatformDetector, resolve_platform_tags},
    runtime::Runtime,
    tool::Tool,
};

use super::config::Config;
use super::list::list_platforms;

/// What a single run should fetch and where it should go.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub tool: Tool,
    /// Release to use; the latest release when absent
    pub version: Option<String>,
    pub output: PathBuf,
    /// Platform tag to use instead of detection
    pub platform: Option<String>,
    /// Print available platforms instead of downloading
    pub list_platforms: bool,
    pub repo: GitHubRepo,
}

/// Fetch release metadata, then either list platforms or download the
/// matching wheel into `options.output`.
#[tracing::instrument(skip(config, detector))]
pub async fn run<R: Runtime, G: GetRelease, P: PlatformDetector>(
    options: FetchOptions,
    config: &Config<R, G>,
    detector: &P,
) -> Result<()> {
    match &options.version {
        Some(version) => println!("Fetching release information for version {}...", version),
        None => println!("Fetching latest release information..."),
    }

    let release = config
        .github
        .get_release(&options.repo, options.version.clone())
        .await?;

    debug!(
        "Release {} has {} assets",
        release.tag_name,
        release.assets.len()
    );

    if options.list_platforms {
        list_platforms(&release, options.tool);
        return Ok(());
    }

    let platform_tags = match &options.platform {
        Some(platform) => vec![platform.clone()],
        None => {
            let tags = resolve_platform_tags(&config.runtime, detector)?;
            println!("Detected platform: {}", tags[0]);
            tags
        }
    };

    let asset = find_wheel_asset(
        &release.assets,
        options.tool,
        &platform_tags,
        Some(release.version()),
    )
    .ok_or_else(|| WheelError::AssetNotFound {
        tool: options.tool.to_string(),
        platform: platform_tags[0].clone(),
        requested_version: options.version.clone(),
        release_tag: release.tag_name.clone(),
    })?;

    let file = options.output.join(&asset.name);
    if !download_wheel(
        &config.runtime,
        &asset.browser_download_url,
        &file,
        &config.http_client,
    )
    .await
    {
        return Err(WheelError::DownloadFailed { file }.into());
    }

    println!();
    println!("Wheel downloaded successfully!");
    println!("File: {}", file.display());
    println!("Size: {:.1} MB", asset.size as f64 / (1024.0 * 1024.0));
    println!();
    println!("To install: pip install {}", file.display());

    Ok(())
}
