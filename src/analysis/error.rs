//! Error types for the analysis client.

use thiserror::Error;

/// Failure talking to the analysis service.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// HTTP request failed (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base URL or path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `detail` from the service, or the raw body.
        message: String,
    },
}
