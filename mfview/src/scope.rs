//! Lifetime of a mounted view
//!
//! Every request a view issues runs under the view's [`ViewScope`]. Tearing
//! the view down (dropping the scope or calling [`ViewScope::unmount`])
//! cancels the scope token, which resolves every in-flight fetch to
//! [`ViewError::Cancelled`] so its result is never applied.

use crate::error::{Result, ViewError};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug)]
pub struct ViewScope {
    view: String,
    token: CancellationToken,
}

impl ViewScope {
    pub fn new(view: impl Into<String>) -> Self {
        let view = view.into();
        info!(view = %view, "View mounted");
        Self {
            view,
            token: CancellationToken::new(),
        }
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    /// Token cancelled at teardown; clones observe the same cancellation
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Token for one request, cancelled at teardown or on its own
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// False once the view has been torn down
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run `fut` until it completes or the view is torn down
    pub async fn fetch<T, E, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: Into<ViewError>,
    {
        race(&self.token, fut).await
    }

    /// Explicit teardown
    pub fn unmount(&self) {
        if !self.token.is_cancelled() {
            info!(view = %self.view, "View unmounted");
            self.token.cancel();
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Run `fut` until it completes or `token` is cancelled
///
/// A result that completes after cancellation is discarded.
pub async fn race<T, E, F>(token: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<ViewError>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("Fetch cancelled");
            Err(ViewError::Cancelled)
        }
        result = fut => {
            if token.is_cancelled() {
                return Err(ViewError::Cancelled);
            }
            result.map_err(Into::into)
        }
    }
}
