//! Provider and handles of the playback coordinator
//!
//! A [`PlayerProvider`] is created once per session and owns the playback
//! state. Views never touch the state directly: they receive a
//! [`PlayerHandle`] and go through its operations. Handles only hold a weak
//! reference, so once the provider is dropped every operation fails with
//! [`PlayerError::OutOfScope`].
//!
//! # Example
//!
//! ```
//! use mfmodel::TrackRef;
//! use mfplayer::PlayerProvider;
//!
//! # fn main() -> mfplayer::Result<()> {
//! let provider = PlayerProvider::new();
//! let player = provider.handle();
//!
//! player.set_current_track(Some(TrackRef::new("A", "B", "u", "3:00")))?;
//! player.set_music_playing(true)?;
//!
//! let snap = player.snapshot()?;
//! assert!(snap.is_music_playing && !snap.is_radio_playing);
//! # Ok(())
//! # }
//! ```

use crate::error::{PlayerError, Result};
use crate::state::{PlaybackSnapshot, PlaybackState, DEFAULT_VOLUME};
use mfmodel::{RadioStation, TrackRef};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug)]
struct Shared {
    state: RwLock<PlaybackState>,
    notifier: watch::Sender<PlaybackSnapshot>,
}

/// Owner of the session's playback state
///
/// Dropping the provider tears the coordinator down.
#[derive(Debug)]
pub struct PlayerProvider {
    shared: Arc<Shared>,
}

impl PlayerProvider {
    /// Create a provider with the default volume (70)
    pub fn new() -> Self {
        Self::with_volume(DEFAULT_VOLUME)
    }

    pub fn with_volume(volume: u8) -> Self {
        let state = PlaybackState::new(volume);
        let (notifier, _) = watch::channel(state.snapshot());
        info!(volume, "Player provider created");
        Self {
            shared: Arc::new(Shared {
                state: RwLock::new(state),
                notifier,
            }),
        }
    }

    /// Create a provider starting at the configured default volume
    #[cfg(feature = "mfconfig")]
    pub fn from_config(config: &mfconfig::Config) -> Self {
        Self::with_volume(config.get_default_volume().unwrap_or(DEFAULT_VOLUME))
    }

    /// A handle bound to this provider
    pub fn handle(&self) -> PlayerHandle {
        PlayerHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.shared
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }
}

impl Default for PlayerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlayerProvider {
    fn drop(&mut self) {
        info!("Player provider torn down");
    }
}

/// Capability to read and drive the playback state
///
/// Cheap to clone; every page that can start playback keeps one.
#[derive(Debug, Clone, Default)]
pub struct PlayerHandle {
    shared: Weak<Shared>,
}

impl PlayerHandle {
    /// A handle bound to no provider; every operation fails with `OutOfScope`
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the provider behind this handle is still alive
    pub fn is_bound(&self) -> bool {
        self.shared.strong_count() > 0
    }

    fn shared(&self) -> Result<Arc<Shared>> {
        self.shared.upgrade().ok_or(PlayerError::OutOfScope)
    }

    /// Apply one transition and publish it, both under the write lock
    ///
    /// Publishing before the guard is released keeps the watched value in
    /// transition order when handles race on several threads.
    fn update(&self, op: &'static str, f: impl FnOnce(&mut PlaybackState)) -> Result<()> {
        let shared = self.shared()?;
        let mut state = shared.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
        let snapshot = state.snapshot();
        debug!(
            op,
            music = snapshot.is_music_playing,
            radio = snapshot.is_radio_playing,
            volume = snapshot.volume,
            "Playback state updated"
        );
        shared.notifier.send_replace(snapshot);
        Ok(())
    }

    pub fn snapshot(&self) -> Result<PlaybackSnapshot> {
        let shared = self.shared()?;
        let state = shared.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.snapshot())
    }

    /// Observe every transition, starting from the current state
    pub fn subscribe(&self) -> Result<watch::Receiver<PlaybackSnapshot>> {
        Ok(self.shared()?.notifier.subscribe())
    }

    // ========================================================================
    // Track playback
    // ========================================================================

    /// Replace the track slot; the playing flags are left alone
    pub fn set_current_track(&self, track: Option<TrackRef>) -> Result<()> {
        self.update("set_current_track", |s| s.set_current_track(track))
    }

    /// `true` also stops the radio
    pub fn set_music_playing(&self, playing: bool) -> Result<()> {
        self.update("set_music_playing", |s| s.set_music_playing(playing))
    }

    pub fn toggle_music_play_pause(&self) -> Result<()> {
        self.update("toggle_music_play_pause", PlaybackState::toggle_music)
    }

    /// Select `track` and start it in a single transition
    pub fn play_track(&self, track: TrackRef) -> Result<()> {
        info!(title = %track.title, artist = %track.artist, "Playing track");
        self.update("play_track", |s| {
            s.set_current_track(Some(track));
            s.set_music_playing(true);
        })
    }

    // ========================================================================
    // Radio playback
    // ========================================================================

    /// Replace the station slot; the playing flags are left alone
    pub fn set_current_radio_station(&self, station: Option<RadioStation>) -> Result<()> {
        self.update("set_current_radio_station", |s| {
            s.set_current_radio_station(station)
        })
    }

    /// `true` also stops the music
    pub fn set_radio_playing(&self, playing: bool) -> Result<()> {
        self.update("set_radio_playing", |s| s.set_radio_playing(playing))
    }

    pub fn toggle_radio_play_pause(&self) -> Result<()> {
        self.update("toggle_radio_play_pause", PlaybackState::toggle_radio)
    }

    /// Select `station` and start it in a single transition
    pub fn play_station(&self, station: RadioStation) -> Result<()> {
        info!(station = %station.name, id = %station.id, "Playing radio station");
        self.update("play_station", |s| {
            s.set_current_radio_station(Some(station));
            s.set_radio_playing(true);
        })
    }

    // ========================================================================
    // Shared controls
    // ========================================================================

    /// Stop whatever is playing; the selected track and station are kept
    pub fn stop(&self) -> Result<()> {
        self.update("stop", PlaybackState::stop)
    }

    /// Range checking is the caller's job (the slider supplies 0-100)
    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.update("set_volume", |s| s.set_volume(volume))
    }
}
