//! Playback-state coordinator for MelodyFlow
//!
//! Single authority for "what is currently playing". It tracks intent only:
//! which track or station was last selected, which of the two is playing,
//! and the volume. Actual audio transport belongs to whoever renders the
//! transport bar.
//!
//! At most one of music and radio plays at any instant. Starting one stops
//! the other in the same transition, and stopping one never touches the
//! other. The selected track and station are remembered independently, so a
//! paused source still shows what was last chosen.
//!
//! # Example
//!
//! ```
//! use mfmodel::{RadioStation, TrackRef};
//! use mfplayer::{PlaybackMode, PlayerProvider};
//!
//! # fn main() -> mfplayer::Result<()> {
//! let provider = PlayerProvider::new();
//! let player = provider.handle();
//!
//! player.play_track(TrackRef::new("A", "B", "u", "3:00"))?;
//! player.play_station(RadioStation::new("r1", "X", "Y", "i"))?;
//!
//! let snap = player.snapshot()?;
//! assert_eq!(snap.mode(), PlaybackMode::PlayingRadio);
//! assert!(snap.current_track.is_some());
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod error;
pub mod state;

pub use coordinator::{PlayerHandle, PlayerProvider};
pub use error::{PlayerError, Result};
pub use state::{PlaybackMode, PlaybackSnapshot, DEFAULT_VOLUME};
