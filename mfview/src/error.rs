//! Error types for the views

/// Result type alias for view operations
pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The view was torn down before the request completed
    #[error("view was unmounted")]
    Cancelled,

    #[error(transparent)]
    Catalog(#[from] mfcatalog::Error),

    #[error(transparent)]
    Radio(#[from] mfradio::Error),

    #[error(transparent)]
    Player(#[from] mfplayer::PlayerError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ViewError {
    /// Cancellations are dropped silently instead of being shown
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
