//! Radio station directory client for MelodyFlow
//!
//! This crate lists the stations of a country through the public radio
//! directory (`GET /stations/bycountry/<country>`), maps them to the
//! [`RadioStation`](mfmodel::RadioStation) cards of the radio page and
//! groups them by language region.
//!
//! # Example
//!
//! ```no_run
//! use mfradio::{classify, default_regions, RadioDirectoryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadioDirectoryClient::new().await?;
//!     let stations = client.stations_by_country("India").await?;
//!
//!     for group in classify(&stations, &default_regions()) {
//!         println!("{}: {} station(s)", group.region, group.stations.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod directory;
pub mod error;
pub mod models;
pub mod region;

pub use client::{ClientBuilder, RadioDirectoryClient};
pub use directory::StationDirectory;
pub use error::{Error, Result};
pub use models::DirectoryStation;
pub use region::{classify, default_regions, stations_in_region, Region, RegionGroup, OTHER_REGION};
