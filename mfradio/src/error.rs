//! Error types for the radio directory client

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when querying the station directory
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned a non-success status
    #[error("API error: {0}")]
    ApiError(String),

    /// Country name unusable as a path segment
    #[error("Invalid country: {0:?}")]
    InvalidCountry(String),

    /// Configuration error
    #[cfg(feature = "mfconfig")]
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Error for a non-success HTTP status; the message carries the status code
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::ApiError(format!("API returned status: {}", status))
    }
}
