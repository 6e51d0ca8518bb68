//! Search the catalog and print the album grid
//!
//! Usage: cargo run -p mfcatalog --example search_catalog -- [term]

use mfcatalog::{CatalogClient, ClientBuilder};
use mfconfig::get_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "pop".to_string());
    let client: CatalogClient = ClientBuilder::from_config(&get_config())?.build().await?;

    println!("Searching '{}' in {}...", term, client.country());
    let albums = client.search_albums(&term).await?;

    for album in &albums {
        println!("  [{}] {} - {} ({})", album.id, album.artist, album.title, album.year);
        println!("        {}", album.cover_url);
    }
    println!("{} result(s)", albums.len());

    Ok(())
}
