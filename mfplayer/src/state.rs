//! Playback state owned by the coordinator
//!
//! The two "is playing" flags of the transport bar are derived from a single
//! [`PlaybackMode`], so music and radio can never be reported as playing at
//! the same time. The last selected track and station live in their own
//! slots and survive pauses and mode switches.

use mfmodel::{RadioStation, TrackRef};

/// Volume a fresh session starts with
pub const DEFAULT_VOLUME: u8 = 70;

/// Which source, if any, is currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Idle,
    PlayingMusic,
    PlayingRadio,
}

#[derive(Debug, Clone)]
pub(crate) struct PlaybackState {
    last_track: Option<TrackRef>,
    last_station: Option<RadioStation>,
    mode: PlaybackMode,
    volume: u8,
}

impl PlaybackState {
    pub(crate) fn new(volume: u8) -> Self {
        Self {
            last_track: None,
            last_station: None,
            mode: PlaybackMode::Idle,
            volume,
        }
    }

    pub(crate) fn set_current_track(&mut self, track: Option<TrackRef>) {
        self.last_track = track;
    }

    pub(crate) fn set_current_radio_station(&mut self, station: Option<RadioStation>) {
        self.last_station = station;
    }

    /// Turning music on stops the radio; turning it off only affects music.
    pub(crate) fn set_music_playing(&mut self, playing: bool) {
        if playing {
            self.mode = PlaybackMode::PlayingMusic;
        } else if self.mode == PlaybackMode::PlayingMusic {
            self.mode = PlaybackMode::Idle;
        }
    }

    pub(crate) fn set_radio_playing(&mut self, playing: bool) {
        if playing {
            self.mode = PlaybackMode::PlayingRadio;
        } else if self.mode == PlaybackMode::PlayingRadio {
            self.mode = PlaybackMode::Idle;
        }
    }

    pub(crate) fn toggle_music(&mut self) {
        let playing = self.mode == PlaybackMode::PlayingMusic;
        self.set_music_playing(!playing);
    }

    pub(crate) fn toggle_radio(&mut self) {
        let playing = self.mode == PlaybackMode::PlayingRadio;
        self.set_radio_playing(!playing);
    }

    pub(crate) fn stop(&mut self) {
        self.mode = PlaybackMode::Idle;
    }

    pub(crate) fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }

    pub(crate) fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.last_track.clone(),
            current_radio_station: self.last_station.clone(),
            is_music_playing: self.mode == PlaybackMode::PlayingMusic,
            is_radio_playing: self.mode == PlaybackMode::PlayingRadio,
            is_radio: self.last_station.is_some(),
            volume: self.volume,
        }
    }
}

/// Read-only copy of the coordinator state at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub current_track: Option<TrackRef>,
    pub current_radio_station: Option<RadioStation>,
    pub is_music_playing: bool,
    pub is_radio_playing: bool,
    /// True whenever a station is selected, playing or not
    pub is_radio: bool,
    /// 0-100 as supplied by the caller
    pub volume: u8,
}

impl PlaybackSnapshot {
    pub fn mode(&self) -> PlaybackMode {
        match (self.is_music_playing, self.is_radio_playing) {
            (true, _) => PlaybackMode::PlayingMusic,
            (false, true) => PlaybackMode::PlayingRadio,
            (false, false) => PlaybackMode::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.mode() == PlaybackMode::Idle
    }
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        PlaybackState::new(DEFAULT_VOLUME).snapshot()
    }
}
