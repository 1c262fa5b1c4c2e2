use crate::http::HttpClient;
use crate::runtime::Runtime;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

/// Streams `url` into a file created at `dest` through the runtime.
///
/// The file is only created once the server has answered successfully.
/// Returns the number of bytes written.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    url: &str,
    dest: &Path,
    http_client: &HttpClient,
) -> Result<u64> {
    info!("Downloading file from {}...", url);

    let bytes = http_client
        .download_file(url, || {
            runtime
                .create_file(dest)
                .with_context(|| format!("Failed to create file at {:?}", dest))
        })
        .await?;

    info!("Download complete.");
    Ok(bytes)
}

/// Download a wheel to `dest`, creating its parent directory first.
///
/// Progress and failures are printed; the outcome is only reported as a
/// boolean. A failed transfer may leave a partial file behind.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn download_wheel<R: Runtime>(
    runtime: &R,
    url: &str,
    dest: &Path,
    http_client: &HttpClient,
) -> bool {
    let file = dest.display();
    println!("Downloading {}...", file);

    let result = async {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !runtime.exists(parent) {
                debug!("Creating output directory {:?}", parent);
                runtime.create_dir_all(parent)?;
            }
        }
        download_file(runtime, url, dest, http_client).await
    }
    .await;

    match result {
        Ok(bytes) => {
            debug!("Wrote {} bytes to {:?}", bytes, dest);
            println!("Successfully downloaded {}", file);
            true
        }
        Err(e) => {
            println!("Failed to download {}: {:#}", file, e);
            false
        }
    }
}
