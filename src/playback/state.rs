//! UI-facing playback state.

use crate::audio::level::AudioLevel;

/// Player state record
///
/// Flags toggle independently; nothing stops the user from entering
/// fullscreen while paused or muting before playback starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Playback logically active. May lag the surface by one event.
    pub is_playing: bool,
    /// Fullscreen has been requested
    pub is_full_screen: bool,
    /// Media length in whole seconds, 0 until metadata loads
    pub duration: u64,
    /// Last observed position (seconds)
    pub current_time: f64,
    /// Displayed volume and mute flag
    pub audio: AudioLevel,
}

impl PlayerState {
    /// Fresh state with the given starting volume
    pub fn new(volume: f64) -> Self {
        Self {
            is_playing: false,
            is_full_screen: false,
            duration: 0,
            current_time: 0.0,
            audio: AudioLevel::new(volume),
        }
    }

    /// Check if audio is suppressed
    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    /// Displayed volume (0 while muted)
    pub fn volume(&self) -> f64 {
        self.audio.volume()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(crate::audio::level::UNMUTED_VOLUME)
    }
}
