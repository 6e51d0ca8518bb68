//! Data models for the catalog search API
//!
//! The API answers `GET /search` with `{ resultCount, results: [...] }`.
//! Every field of a result is optional; [`SearchResult::to_album`] applies
//! the fallbacks the album grid relies on.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use mfmodel::{Album, PLACEHOLDER_COVER};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback for missing titles and artist names
pub const UNKNOWN: &str = "Unknown";

const SMALL_ARTWORK: &str = "100x100bb";
const LARGE_ARTWORK: &str = "300x300bb";

/// Response body of `GET /search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    /// Map every result to an album; a missing `results` array is an empty grid
    pub fn into_albums(self) -> Vec<Album> {
        self.results
            .unwrap_or_default()
            .iter()
            .map(SearchResult::to_album)
            .collect()
    }
}

/// One entry of the `results` array (entity = song)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "collectionId", default)]
    pub collection_id: Option<u64>,
    #[serde(rename = "trackId", default)]
    pub track_id: Option<u64>,
    #[serde(rename = "collectionName", default)]
    pub collection_name: Option<String>,
    #[serde(rename = "trackCensoredName", default)]
    pub track_censored_name: Option<String>,
    #[serde(rename = "artistName", default)]
    pub artist_name: Option<String>,
    /// RFC 3339 timestamp, e.g. "2019-05-03T07:00:00Z"
    #[serde(rename = "releaseDate", default)]
    pub release_date: Option<String>,
    #[serde(rename = "artworkUrl100", default)]
    pub artwork_url100: Option<String>,
    #[serde(rename = "artworkUrl60", default)]
    pub artwork_url60: Option<String>,
}

impl SearchResult {
    /// Collection id, then track id, then a fresh random id
    pub fn album_id(&self) -> String {
        self.collection_id
            .or(self.track_id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Collection name, then censored track name, then "Unknown"
    pub fn title(&self) -> String {
        self.collection_name
            .as_deref()
            .or(self.track_censored_name.as_deref())
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    pub fn artist(&self) -> String {
        self.artist_name.as_deref().unwrap_or(UNKNOWN).to_string()
    }

    /// Year of the release date, or the current year when absent or unreadable
    pub fn year(&self) -> i32 {
        self.release_date
            .as_deref()
            .and_then(parse_year)
            .unwrap_or_else(|| Utc::now().year())
    }

    /// Largest artwork available, upscaled to 300x300
    pub fn cover_url(&self) -> String {
        let artwork = [&self.artwork_url100, &self.artwork_url60]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_COVER);
        artwork.replace(SMALL_ARTWORK, LARGE_ARTWORK)
    }

    pub fn to_album(&self) -> Album {
        Album {
            id: self.album_id(),
            title: self.title(),
            artist: self.artist(),
            year: self.year(),
            cover_url: self.cover_url(),
        }
    }
}

fn parse_year(date: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.year());
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.year());
    }
    // "2019" or "2019-05"
    date.get(..4)
        .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|y| y.parse().ok())
}
