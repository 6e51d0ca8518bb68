//! HTTP client for the radio station directory
//!
//! # Example
//!
//! ```no_run
//! use mfradio::RadioDirectoryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadioDirectoryClient::new().await?;
//!
//!     for station in client.stations("India").await? {
//!         println!("{} [{}]", station.name, station.genre);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::DirectoryStation;
use mfmodel::RadioStation;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default directory base URL
pub const DEFAULT_BASE_URL: &str = "https://de1.api.radio-browser.info/json";

/// Default country queried by the radio page
pub const DEFAULT_COUNTRY: &str = "India";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "MelodyFlow/0.1.0 (mfradio)";

/// Radio directory HTTP client
#[derive(Debug, Clone)]
pub struct RadioDirectoryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RadioDirectoryClient {
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
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL listing the stations of `country`
    ///
    /// The country is a single path segment, so spaces and slashes are
    /// percent-encoded.
    pub fn stations_url(&self, country: &str) -> Result<Url> {
        let country = country.trim();
        if country.is_empty() {
            return Err(Error::InvalidCountry(country.to_string()));
        }

        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::other(format!("base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["stations", "bycountry", country]);
        Ok(url)
    }

    /// Raw station records of `country`, in directory order
    pub async fn stations_by_country(&self, country: &str) -> Result<Vec<DirectoryStation>> {
        let url = self.stations_url(country)?;
        debug!(%url, "Fetching stations");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(country, %status, "Station directory request failed");
            return Err(Error::status(status));
        }

        let body = response.bytes().await?;
        let stations: Vec<DirectoryStation> = serde_json::from_slice(&body)?;

        debug!(country, count = stations.len(), "Stations fetched");
        Ok(stations)
    }

    /// Stations of `country` mapped for display
    pub async fn stations(&self, country: &str) -> Result<Vec<RadioStation>> {
        Ok(self
            .stations_by_country(country)
            .await?
            .iter()
            .map(DirectoryStation::to_radio_station)
            .collect())
    }
}

/// Builder for configuring a RadioDirectoryClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
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

    /// Builder preloaded with the `radio` section of the configuration
    #[cfg(feature = "mfconfig")]
    pub fn from_config(config: &mfconfig::Config) -> Result<Self> {
        Ok(Self::default()
            .base_url(config.get_radio_base_url()?)
            .timeout(Duration::from_secs(config.get_radio_timeout_secs()?))
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
    pub async fn build(self) -> Result<RadioDirectoryClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(RadioDirectoryClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn client(base_url: &str) -> RadioDirectoryClient {
        RadioDirectoryClient::builder()
            .base_url(base_url)
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_stations_url() {
        let url = client(DEFAULT_BASE_URL).await.stations_url("India").unwrap();
        assert_eq!(
            url.as_str(),
            "https://de1.api.radio-browser.info/json/stations/bycountry/India"
        );
    }

    #[tokio::test]
    async fn test_stations_url_encodes_country() {
        let client = client("http://radio.test/json/").await;
        let url = client.stations_url(" United States ").unwrap();
        assert_eq!(url.path(), "/json/stations/bycountry/United%20States");

        let url = client.stations_url("a/b").unwrap();
        assert_eq!(url.path(), "/json/stations/bycountry/a%2Fb");
    }

    #[tokio::test]
    async fn test_empty_country_is_rejected() {
        let client = client(DEFAULT_BASE_URL).await;
        assert!(matches!(
            client.stations_url("  "),
            Err(Error::InvalidCountry(_))
        ));
    }

    #[tokio::test]
    #[ignore = "Integration test - calls the real station directory"]
    async fn test_live_stations() {
        let client = RadioDirectoryClient::new().await.expect("Failed to create client");
        let stations = client.stations(DEFAULT_COUNTRY).await;

        assert!(stations.is_ok(), "Fetch failed: {:?}", stations.err());
        for station in stations.unwrap().iter().take(5) {
            println!("  - {} [{}]", station.name, station.genre);
        }
    }
}
