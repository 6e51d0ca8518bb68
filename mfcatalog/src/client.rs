//! HTTP client for the catalog search API
//!
//! # Example
//!
//! ```no_run
//! use mfcatalog::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new().await?;
//!
//!     for album in client.search_albums("jazz").await? {
//!         println!("{} - {} ({})", album.artist, album.title, album.year);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::SearchResponse;
use mfmodel::Album;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default catalog base URL
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Default storefront country
pub const DEFAULT_COUNTRY: &str = "IN";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "MelodyFlow/0.1.0 (mfcatalog)";

/// Catalog search HTTP client
///
/// Stateless: every call is one request, nothing is cached.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    country: String,
    timeout: Duration,
}

impl CatalogClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from the MelodyFlow configuration
    #[cfg(feature = "mfconfig")]
    pub async fn from_config(config: &mfconfig::Config) -> Result<Self> {
        ClientBuilder::from_config(config)?.build().await
    }

    /// Create a client sharing an existing reqwest connection pool
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// URL of a song search for `term`
    pub fn search_url(&self, term: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/search", self.base_url.trim_end_matches('/')))?;
        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("country", &self.country)
            .append_pair("media", "music")
            .append_pair("entity", "song");
        Ok(url)
    }

    /// Raw song search
    ///
    /// A non-success status is reported as [`Error::ApiError`] with the
    /// status code in its message.
    pub async fn search(&self, term: &str) -> Result<SearchResponse> {
        let url = self.search_url(term)?;
        debug!(%url, "Searching catalog");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(term, %status, "Catalog search failed");
            return Err(Error::status(status));
        }

        // The API answers with text/javascript, so decode by hand
        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        debug!(
            term,
            results = parsed.results.as_ref().map_or(0, Vec::len),
            "Catalog search done"
        );
        Ok(parsed)
    }

    /// Song search mapped to the album grid
    pub async fn search_albums(&self, term: &str) -> Result<Vec<Album>> {
        Ok(self.search(term).await?.into_albums())
    }
}

/// Builder for configuring a CatalogClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    country: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the `catalog` section of the configuration
    #[cfg(feature = "mfconfig")]
    pub fn from_config(config: &mfconfig::Config) -> Result<Self> {
        Ok(Self::default()
            .base_url(config.get_catalog_base_url()?)
            .country(config.get_catalog_country()?)
            .timeout(Duration::from_secs(config.get_catalog_timeout_secs()?))
            .user_agent(config.get_user_agent()?))
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the storefront country (ISO code)
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<CatalogClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(CatalogClient {
            client,
            base_url: self.base_url,
            country: self.country,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.country, DEFAULT_COUNTRY);
        assert_eq!(
            builder.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(builder.client.is_none());
    }

    #[tokio::test]
    async fn test_search_url_encodes_term() {
        let client = CatalogClient::builder()
            .base_url("https://catalog.test/")
            .country("FR")
            .build()
            .await
            .unwrap();

        let url = client.search_url("hip hop & r&b").unwrap();
        assert_eq!(url.path(), "/search");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("term".to_string(), "hip hop & r&b".to_string()),
                ("country".to_string(), "FR".to_string()),
                ("media".to_string(), "music".to_string()),
                ("entity".to_string(), "song".to_string()),
            ]
        );
    }

    #[tokio::test]
    #[ignore = "Integration test - calls the real catalog API"]
    async fn test_live_search() {
        let client = CatalogClient::new().await.expect("Failed to create client");
        let albums = client.search_albums("pop").await;

        assert!(albums.is_ok(), "Search failed: {:?}", albums.err());
        let albums = albums.unwrap();
        assert!(!albums.is_empty(), "Expected results for 'pop'");

        for album in albums.iter().take(5) {
            println!("  - {} / {} ({})", album.title, album.artist, album.year);
        }
    }
}
