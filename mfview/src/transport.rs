//! Persistent transport bar
//!
//! Reads the coordinator on every call and keeps only cosmetic toggles
//! (liked, shuffle, repeat) locally.

use crate::error::Result;
use mfmodel::{RadioStation, TrackRef, DEFAULT_TRACK_DURATION};
use mfplayer::{PlaybackSnapshot, PlayerHandle, DEFAULT_VOLUME};
use tracing::debug;

/// Shown before anything was ever selected
pub fn default_track() -> TrackRef {
    TrackRef::new(
        "Starlight Symphony",
        "Luna Wave",
        "/api/placeholder/60/60",
        DEFAULT_TRACK_DURATION,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowPlaying {
    Track(TrackRef),
    Station(RadioStation),
}

impl NowPlaying {
    /// Radio streams have no duration
    pub fn duration(&self) -> Option<&str> {
        match self {
            Self::Track(track) => Some(track.duration.as_str()),
            Self::Station(_) => None,
        }
    }

    pub fn is_station(&self) -> bool {
        matches!(self, Self::Station(_))
    }

    /// A playing station wins, then the last track, then the last station
    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Self {
        match (&snapshot.current_radio_station, &snapshot.current_track) {
            (Some(station), _) if snapshot.is_radio_playing => Self::Station(station.clone()),
            (_, Some(track)) => Self::Track(track.clone()),
            (Some(station), None) => Self::Station(station.clone()),
            (None, None) => Self::Track(default_track()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransportBar {
    player: PlayerHandle,
    default_volume: u8,
    liked: bool,
    shuffle: bool,
    repeat: bool,
}

impl TransportBar {
    pub fn new(player: PlayerHandle) -> Self {
        Self::with_default_volume(player, DEFAULT_VOLUME)
    }

    /// `default_volume` is restored when unmuting
    pub fn with_default_volume(player: PlayerHandle, default_volume: u8) -> Self {
        Self {
            player,
            default_volume,
            liked: false,
            shuffle: false,
            repeat: false,
        }
    }

    pub fn now_playing(&self) -> Result<NowPlaying> {
        Ok(NowPlaying::from_snapshot(&self.player.snapshot()?))
    }

    /// Whether the source shown is playing
    pub fn is_playing(&self) -> Result<bool> {
        let snapshot = self.player.snapshot()?;
        Ok(match NowPlaying::from_snapshot(&snapshot) {
            NowPlaying::Station(_) => snapshot.is_radio_playing,
            NowPlaying::Track(_) => snapshot.is_music_playing,
        })
    }

    /// Play/pause button: drives whichever source is shown
    pub fn toggle_play_pause(&self) -> Result<()> {
        if self.now_playing()?.is_station() {
            self.player.toggle_radio_play_pause()?;
        } else {
            self.player.toggle_music_play_pause()?;
        }
        Ok(())
    }

    pub fn volume(&self) -> Result<u8> {
        Ok(self.player.snapshot()?.volume)
    }

    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.player.set_volume(volume)?;
        Ok(())
    }

    pub fn is_muted(&self) -> Result<bool> {
        Ok(self.volume()? == 0)
    }

    /// Switch between silence and the default volume
    pub fn toggle_mute(&self) -> Result<()> {
        let volume = if self.is_muted()? { self.default_volume } else { 0 };
        debug!(volume, "Toggling mute");
        self.set_volume(volume)
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn toggle_liked(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }
}
