//! Walk through the pages against the live APIs
//!
//! Usage: cargo run -p mfview --example browse -- [genre]

use mfcatalog::CatalogClient;
use mfconfig::get_config;
use mfplayer::PlayerProvider;
use mfradio::RadioDirectoryClient;
use mfview::{init_logging, GenrePage, HomePage, RadioPage, TransportBar};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();
    init_logging(&config)?;

    let genre = std::env::args().nth(1).unwrap_or_else(|| "jazz".to_string());
    let catalog = Arc::new(CatalogClient::from_config(&config).await?);
    let directory = Arc::new(RadioDirectoryClient::from_config(&config).await?);
    let provider = PlayerProvider::from_config(&config);
    let bar = TransportBar::with_default_volume(provider.handle(), config.get_default_volume()?);

    let mut home = HomePage::new(catalog.clone(), provider.handle());
    home.mount().await;
    for section in [home.trending(), home.recent()] {
        match &section.error {
            Some(error) => println!("{}: {}", section.query, error),
            None => println!("{}: {} album(s)", section.query, section.albums.len()),
        }
    }

    let mut page = GenrePage::new(&genre, config.get_catalog_country_label()?, catalog, provider.handle());
    page.mount().await;
    println!("\n{}", page.title());
    if let Some(album) = page.albums().value().and_then(|albums| albums.first()) {
        page.play(album)?;
    }
    println!("Now playing: {:?}", bar.now_playing()?);

    let mut radio = RadioPage::new(config.get_radio_country()?, directory, provider.handle());
    radio.mount().await;
    println!("\n{} stations live", radio.live_count());
    if let Some(station) = radio.stations().into_iter().find(|s| s.live()) {
        radio.play(&station)?;
    }
    println!("Now playing: {:?}", bar.now_playing()?);

    Ok(())
}
