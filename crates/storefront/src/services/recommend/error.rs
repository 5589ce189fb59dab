//! Error types for the recommendation client.

use thiserror::Error;

/// Errors that can occur when calling the recommendation model.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response carried no candidates.
    #[error("empty response from model")]
    Empty,
}
