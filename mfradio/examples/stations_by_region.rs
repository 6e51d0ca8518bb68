//! List the directory stations of a country grouped by language region
//!
//! Usage: cargo run -p mfradio --example stations_by_region -- [country]

use mfconfig::get_config;
use mfradio::{classify, default_regions, ClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = get_config();
    let country = match std::env::args().nth(1) {
        Some(country) => country,
        None => config.get_radio_country()?,
    };
    let client = ClientBuilder::from_config(&config)?.build().await?;

    println!("Fetching stations for {}...", country);
    let stations = client.stations_by_country(&country).await?;

    for group in classify(&stations, &default_regions()) {
        println!("\n{} ({})", group.region, group.stations.len());
        for station in group.stations.iter().map(|s| s.to_radio_station()) {
            let live = if station.live() { "live" } else { "offline" };
            println!(
                "  {} [{}] {} {}",
                station.name,
                station.genre,
                station.frequency.as_deref().unwrap_or("-"),
                live
            );
        }
    }

    Ok(())
}
