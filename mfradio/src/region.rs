//! Region classification of directory stations
//!
//! A pure transform over a fetched station list: a station belongs to a
//! region when one of the region's keywords appears (case-insensitively) in
//! its name, tags or language.

use crate::models::DirectoryStation;
use serde::{Deserialize, Serialize};

/// Group name for stations matching no region
pub const OTHER_REGION: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Substrings searched for, case-insensitively
    pub keywords: Vec<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, station: &DirectoryStation) -> bool {
        let haystacks = [
            station.name.to_lowercase(),
            station.tags.as_deref().unwrap_or_default().to_lowercase(),
            station.language.as_deref().unwrap_or_default().to_lowercase(),
        ];
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| k.to_lowercase())
            .any(|k| haystacks.iter().any(|h| h.contains(k.as_str())))
    }
}

/// Stations of one region, in directory order
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup {
    pub region: String,
    pub stations: Vec<DirectoryStation>,
}

/// Stations of `stations` that belong to `region`
pub fn stations_in_region(stations: &[DirectoryStation], region: &Region) -> Vec<DirectoryStation> {
    stations
        .iter()
        .filter(|s| region.matches(s))
        .cloned()
        .collect()
}

/// Group stations by region
///
/// Groups follow the order of `regions`; empty regions are omitted. A
/// station matching several regions appears in each of them. Stations
/// matching none are collected in a trailing "Other" group.
pub fn classify(stations: &[DirectoryStation], regions: &[Region]) -> Vec<RegionGroup> {
    let mut groups: Vec<RegionGroup> = regions
        .iter()
        .map(|region| RegionGroup {
            region: region.name.clone(),
            stations: stations_in_region(stations, region),
        })
        .filter(|group| !group.stations.is_empty())
        .collect();

    let others: Vec<DirectoryStation> = stations
        .iter()
        .filter(|s| !regions.iter().any(|r| r.matches(s)))
        .cloned()
        .collect();
    if !others.is_empty() {
        groups.push(RegionGroup {
            region: OTHER_REGION.to_string(),
            stations: others,
        });
    }

    groups
}

/// Language regions for the Indian directory (the default country)
pub fn default_regions() -> Vec<Region> {
    vec![
        Region::new("Hindi", &["hindi", "bollywood"]),
        Region::new("Tamil", &["tamil", "chennai"]),
        Region::new("Telugu", &["telugu", "hyderabad"]),
        Region::new("Malayalam", &["malayalam", "kerala"]),
        Region::new("Kannada", &["kannada", "bengaluru", "bangalore"]),
        Region::new("Bengali", &["bengali", "bangla", "kolkata"]),
        Region::new("Marathi", &["marathi", "pune"]),
        Region::new("Punjabi", &["punjabi", "punjab"]),
    ]
}
