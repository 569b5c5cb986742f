use reqwest::StatusCode;
use thiserror::Error;

/// Failures a provider call can hit before producing a usable value.
///
/// These never cross the client boundary: the public operations log them
/// and report absence instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}
