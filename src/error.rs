// Error types for emojiboard.
// Covers configuration, Slack API, retry, and cache failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmojiboardError {
    #[error("missing required environment variable {0}")]
    MissingCredential(&'static str),

    #[error("request to {method} failed: {detail}\n{body}")]
    FetchFailed {
        method: String,
        detail: String,
        body: String,
    },

    #[error("Slack rejected {method} call: {body}")]
    ApiRejected { method: String, body: String },

    #[error("still rate limited after {attempts} attempts to {method}")]
    RetryExhausted { method: String, attempts: u32 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EmojiboardError>;
