//! HTTP client module with status error classification.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{HttpStatusError, check_status, classify_status};
