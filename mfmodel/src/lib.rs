//! Data models shared by the MelodyFlow crates
//!
//! These are the values the catalog pages display and the playback
//! coordinator tracks. They are plain data: no identity beyond their fields,
//! serialised with camelCase names to match the catalog JSON.

use serde::{Deserialize, Serialize};

/// Duration shown for tracks whose length the catalog does not report
pub const DEFAULT_TRACK_DURATION: &str = "3:45";

/// Placeholder artwork used when a catalog entry has none
pub const PLACEHOLDER_COVER: &str = "/api/placeholder/300/300";

// ============================================================================
// Playback references
// ============================================================================

/// What the transport bar needs to show an on-demand track
///
/// Created by a page when it asks for playback to begin and replaced
/// wholesale on each play action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    /// Display-formatted duration ("3:45"), not seconds
    pub duration: String,
}

impl TrackRef {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        cover_url: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover_url: cover_url.into(),
            duration: duration.into(),
        }
    }
}

/// A radio station as listed by the station directory
///
/// The playback coordinator treats it as an opaque value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RadioStation {
    /// Unique within one fetched station list
    pub id: String,
    pub name: String,
    pub genre: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

impl RadioStation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        genre: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
            image_url: image_url.into(),
            frequency: None,
            is_live: None,
            stream_url: None,
        }
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_live(mut self, live: bool) -> Self {
        self.is_live = Some(live);
        self
    }

    pub fn with_stream_url(mut self, url: impl Into<String>) -> Self {
        self.stream_url = Some(url.into());
        self
    }

    /// `is_live` defaults to false when the directory did not say
    pub fn live(&self) -> bool {
        self.is_live.unwrap_or(false)
    }
}

// ============================================================================
// Catalog cards
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub cover_url: String,
}

impl Album {
    /// The reference played when the album card's play button is pressed
    ///
    /// The catalog search does not return durations, so the default one is used.
    pub fn to_track_ref(&self) -> TrackRef {
        TrackRef::new(
            &self.title,
            &self.artist,
            &self.cover_url,
            DEFAULT_TRACK_DURATION,
        )
    }
}
