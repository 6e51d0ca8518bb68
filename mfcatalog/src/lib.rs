//! Catalog search client for MelodyFlow
//!
//! This crate queries the song-metadata search API
//! (`GET /search?term=..&country=..&media=music&entity=song`) and maps its
//! results to the [`Album`](mfmodel::Album) cards shown by the browsing pages.
//!
//! # Mapping
//!
//! - **id**: `collectionId`, else `trackId`, else a fresh UUID
//! - **title**: `collectionName`, else `trackCensoredName`, else "Unknown"
//! - **year**: year of `releaseDate`, else the current year
//! - **cover**: `artworkUrl100` or `artworkUrl60` upscaled to 300x300, else a placeholder
//!
//! # Example
//!
//! ```no_run
//! use mfcatalog::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::builder().country("US").build().await?;
//!     let albums = client.search_albums("electronic").await?;
//!     println!("Found {} albums", albums.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;

pub use catalog::AlbumCatalog;
pub use client::{CatalogClient, ClientBuilder};
pub use error::{Error, Result};
pub use models::{SearchResponse, SearchResult};
