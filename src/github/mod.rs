//! GitHub releases API access.

mod client;
mod repo;
mod types;

#[cfg(test)]
pub use client::MockGetRelease;
pub use client::{DEFAULT_API_URL, GetRelease, GitHub};
pub use repo::{DEFAULT_REPO, GitHubRepo};
pub use types::{Release, ReleaseAsset};
