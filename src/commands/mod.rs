//! HTTP API Wrappers
//!
//! Frontend bindings to the todo server's JSON endpoints.

mod todo;

use serde::Deserialize;
use thiserror::Error;

pub use todo::*;

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pick the human-readable message out of an error response body
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Join the page origin and an API path
pub(crate) fn join_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// Absolute URL for an API path, relative to the page that served the client
pub(crate) fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    join_url(&origin, path)
}

/// Turn a non-2xx response into `ApiError::Status`
pub(crate) async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}
