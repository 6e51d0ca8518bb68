//! Station source abstraction used by the radio page

use crate::client::RadioDirectoryClient;
use crate::error::Result;
use crate::models::DirectoryStation;
use async_trait::async_trait;

/// Anything that can list the stations of a country
///
/// Raw records are returned so callers can still classify them by region
/// before mapping them for display.
#[async_trait]
pub trait StationDirectory: Send + Sync {
    async fn stations_by_country(&self, country: &str) -> Result<Vec<DirectoryStation>>;
}

#[async_trait]
impl StationDirectory for RadioDirectoryClient {
    async fn stations_by_country(&self, country: &str) -> Result<Vec<DirectoryStation>> {
        RadioDirectoryClient::stations_by_country(self, country).await
    }
}
