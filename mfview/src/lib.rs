//! View-level state for MelodyFlow
//!
//! Pages fetch through the catalog and directory traits, play through a
//! [`PlayerHandle`](mfplayer::PlayerHandle) and never touch each other. A
//! page's fetches are bound to its [`ViewScope`]: once the page is gone, no
//! late response can be applied.
//!
//! # Example
//!
//! ```no_run
//! use mfcatalog::CatalogClient;
//! use mfplayer::PlayerProvider;
//! use mfview::{GenrePage, TransportBar};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = PlayerProvider::new();
//!     let catalog = Arc::new(CatalogClient::new().await?);
//!
//!     let mut page = GenrePage::new("jazz", "India", catalog, provider.handle());
//!     page.mount().await;
//!     if let Some(album) = page.albums().value().and_then(|a| a.first()) {
//!         page.play(album)?;
//!     }
//!
//!     let bar = TransportBar::new(provider.handle());
//!     println!("{:?}", bar.now_playing()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fetch;
pub mod logging;
pub mod pages;
pub mod scope;
pub mod transport;

pub use error::{Result, ViewError};
pub use fetch::FetchState;
pub use logging::{init_logging, LogHandle};
pub use pages::{GenrePage, HomePage, RadioPage, SearchPage, Section, Suggestions};
pub use scope::ViewScope;
pub use transport::{default_track, NowPlaying, TransportBar};
