//! Error types for the playback coordinator

/// Result type alias for coordinator operations
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors raised by a [`PlayerHandle`](crate::PlayerHandle)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The handle was never bound to a provider, or its provider was torn down.
    ///
    /// This is a usage error: retrying cannot succeed.
    #[error("player handle used outside of a PlayerProvider")]
    OutOfScope,
}
