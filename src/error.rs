//! Error types for pictest.
//!
//! One public error enum covers the whole crate: callers of `generate` and
//! `validate` handle a single type and can still tell failure kinds apart.
//! Every variant is terminal; nothing in this crate retries internally.

use thiserror::Error;

/// Errors produced by image generation, validation, and the underlying
/// inference transport.
#[derive(Error, Debug)]
pub enum Error {
    /// Precondition violation by the caller. Surfaced before any network
    /// call is attempted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any failure during image generation (transport, HTTP status,
    /// empty or malformed response body), carrying the root cause message.
    #[error("Image generation failed: {0}")]
    Generation(String),

    /// Any failure while interpreting a validation reply (missing text
    /// content, missing JSON span, malformed JSON).
    #[error("Image validation failed: {0}")]
    Validation(String),

    /// Non-success HTTP status from the inference endpoint.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failure.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request or response body (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an API error from a status code and response body text.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Wrap any error into a [`Error::Generation`], preserving the original
    /// message. Already-wrapped generation errors pass through unchanged.
    pub(crate) fn into_generation(self) -> Self {
        match self {
            Self::Generation(_) => self,
            other => Self::Generation(other.to_string()),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
