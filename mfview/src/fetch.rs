//! Load state of one remote collection shown by a view

use crate::error::Result;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// User-visible message
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Record the outcome of a fetch
    ///
    /// A cancelled fetch applies nothing and returns false; a pending
    /// `Loading` falls back to `Idle`.
    pub fn apply(&mut self, result: Result<T>) -> bool {
        match result {
            Ok(value) => *self = Self::Loaded(value),
            Err(e) if e.is_cancelled() => {
                if self.is_loading() {
                    *self = Self::Idle;
                }
                return false;
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                *self = Self::Failed(e.to_string());
            }
        }
        true
    }
}
