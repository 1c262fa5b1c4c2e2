//! Classification of HTTP status failures into user-facing causes.

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

/// HTTP failures with a cause the user can act on.
#[derive(Debug)]
pub enum HttpStatusError {
    /// Rate limit exceeded (HTTP 403 with an exhausted quota, or 429)
    RateLimitExceeded(String),
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Other client errors
    ClientError(String),
}

impl std::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpStatusError::RateLimitExceeded(msg) => {
                write!(f, "Rate limit exceeded: {}. Try again later.", msg)
            }
            HttpStatusError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}", msg)
            }
            HttpStatusError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            HttpStatusError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}", msg)
            }
            HttpStatusError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HttpStatusError {}

/// Header GitHub uses to report the requests left in the current window.
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Maps a failing status to a user-facing cause.
/// Returns `None` for successes and server errors, which keep the reqwest
/// error unchanged.
pub fn classify_status(status: StatusCode, headers: &HeaderMap) -> Option<HttpStatusError> {
    match status {
        StatusCode::UNAUTHORIZED => Some(HttpStatusError::AuthenticationFailed(
            "The server rejected anonymous access".to_string(),
        )),
        StatusCode::FORBIDDEN => {
            let exhausted = headers
                .get(RATE_LIMIT_REMAINING)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.trim() == "0");
            if exhausted {
                Some(HttpStatusError::RateLimitExceeded(
                    "GitHub API rate limit exceeded".to_string(),
                ))
            } else {
                Some(HttpStatusError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ))
            }
        }
        StatusCode::TOO_MANY_REQUESTS => Some(HttpStatusError::RateLimitExceeded(
            "Too many requests".to_string(),
        )),
        StatusCode::NOT_FOUND => Some(HttpStatusError::NotFound(
            "The requested resource was not found".to_string(),
        )),
        s if s.is_client_error() => Some(HttpStatusError::ClientError(format!(
            "HTTP {} error",
            s.as_u16()
        ))),
        _ => None,
    }
}

/// Passes successful responses through. Failing ones become an
/// `anyhow::Error`, carrying the classified cause when there is one.
pub fn check_status(response: Response) -> anyhow::Result<Response> {
    if let Some(classified) = classify_status(response.status(), response.headers()) {
        return Err(classified.into());
    }
    response.error_for_status().map_err(anyhow::Error::from)
}
