//! Data models for the radio directory API
//!
//! `GET /stations/bycountry/<country>` answers with a JSON array of station
//! records. Only `stationuuid` and `name` are always present; the remaining
//! fields are read when available and everything else is ignored.

use mfmodel::RadioStation;
use serde::{Deserialize, Serialize};

/// Shown when a station has no usable name
pub const UNKNOWN_STATION: &str = "Unknown Station";

/// Genre used when a station carries no tags
pub const DEFAULT_GENRE: &str = "Radio";

/// Placeholder artwork for stations without a favicon
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/200/200";

/// A station record as returned by the directory
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DirectoryStation {
    pub stationuuid: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_resolved: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    /// Comma-separated, e.g. "bollywood,hindi,music"
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub countrycode: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Comma-separated, e.g. "hindi,english"
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub codec: Option<String>,
    /// kbps, 0 when unknown
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub votes: Option<i64>,
    #[serde(default)]
    pub clickcount: Option<i64>,
    /// 1 when the last availability check succeeded
    #[serde(default)]
    pub lastcheckok: Option<u8>,
}

impl DirectoryStation {
    /// Non-empty tags in directory order
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        split_list(self.tags.as_deref())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        split_list(self.language.as_deref())
    }

    /// First tag, capitalised, or "Radio"
    pub fn genre(&self) -> String {
        self.tag_list()
            .next()
            .map(capitalize_word)
            .unwrap_or_else(|| DEFAULT_GENRE.to_string())
    }

    /// Resolved stream URL, falling back to the declared one
    pub fn stream_url(&self) -> Option<&str> {
        [&self.url_resolved, &self.url]
            .into_iter()
            .flatten()
            .map(|u| u.trim())
            .find(|u| !u.is_empty())
    }

    /// Stations are live unless the directory's last check failed
    pub fn is_live(&self) -> bool {
        self.lastcheckok != Some(0)
    }

    pub fn to_radio_station(&self) -> RadioStation {
        let name = match self.name.trim() {
            "" => UNKNOWN_STATION,
            trimmed => trimmed,
        };
        let image = self
            .favicon
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE);

        let mut station = RadioStation::new(&self.stationuuid, name, self.genre(), image)
            .with_live(self.is_live());
        if let Some(url) = self.stream_url() {
            station = station.with_stream_url(url);
        }
        if let Some(bitrate) = self.bitrate.filter(|b| *b > 0) {
            station = station.with_frequency(format!("{} kbps", bitrate));
        }
        station
    }
}

fn split_list(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn capitalize_word(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
