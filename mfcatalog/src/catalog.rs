//! Album source abstraction used by the browsing pages

use crate::client::CatalogClient;
use crate::error::Result;
use async_trait::async_trait;
use mfmodel::Album;

/// Anything that can answer a free-text album search
///
/// Pages hold an `Arc<dyn AlbumCatalog>` so they can run against the real
/// API or an in-memory double.
#[async_trait]
pub trait AlbumCatalog: Send + Sync {
    async fn search_albums(&self, term: &str) -> Result<Vec<Album>>;
}

#[async_trait]
impl AlbumCatalog for CatalogClient {
    async fn search_albums(&self, term: &str) -> Result<Vec<Album>> {
        CatalogClient::search_albums(self, term).await
    }
}
