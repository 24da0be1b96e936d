//! Volume and mute state for the player.
//!
//! The volume slider and the mute toggle both write the displayed volume.
//! Keeping the two setters on one type makes the coupling explicit: a zero
//! volume mutes, muting zeroes the volume, and unmuting restores
//! [`UNMUTED_VOLUME`] rather than the last level the user picked.

/// Volume restored whenever the player is unmuted
pub const UNMUTED_VOLUME: f64 = 0.5;

/// Displayed audio level and mute flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioLevel {
    volume: f64,
    muted: bool,
}

impl AudioLevel {
    /// Create an unmuted level at `volume`
    pub fn new(volume: f64) -> Self {
        let mut level = Self {
            volume,
            muted: false,
        };
        level.set_volume(volume);
        level
    }

    /// Current displayed volume
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether audio is suppressed
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Apply a volume picked by the user.
    ///
    /// The value is stored as given; range checking is left to the input
    /// control. Exactly zero mutes. Any other value leaves the mute flag
    /// alone, so dragging up from a muted state does not unmute by itself.
    /// Returns the value to write to the surface.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        self.volume = volume;
        if volume == 0.0 {
            self.muted = true;
        }
        volume
    }

    /// Set the mute flag and the displayed volume that goes with it.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.volume = if muted { 0.0 } else { UNMUTED_VOLUME };
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_muted(&mut self) -> bool {
        let muted = !self.muted;
        self.set_muted(muted);
        muted
    }
}

impl Default for AudioLevel {
    fn default() -> Self {
        Self::new(UNMUTED_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let level = AudioLevel::default();
        assert_eq!(level.volume(), 0.5);
        assert!(!level.is_muted());
    }

    #[test]
    fn test_zero_volume_mutes() {
        let mut level = AudioLevel::new(0.3);
        assert_eq!(level.set_volume(0.0), 0.0);
        assert!(level.is_muted());
    }

    #[test]
    fn test_nonzero_volume_keeps_mute_flag() {
        let mut level = AudioLevel::new(0.3);
        level.set_volume(0.0);
        level.set_volume(0.01);
        assert!(level.is_muted());
        assert_eq!(level.volume(), 0.01);

        let mut unmuted = AudioLevel::new(0.3);
        unmuted.set_volume(0.01);
        assert!(!unmuted.is_muted());
    }

    #[test]
    fn test_unmute_restores_default_not_previous() {
        let mut level = AudioLevel::new(0.3);

        assert!(level.toggle_muted());
        assert_eq!(level.volume(), 0.0);

        assert!(!level.toggle_muted());
        assert_eq!(level.volume(), UNMUTED_VOLUME);
    }

    #[test]
    fn test_new_at_zero_starts_muted() {
        let level = AudioLevel::new(0.0);
        assert!(level.is_muted());
    }

    #[test]
    fn test_out_of_range_volume_passes_through() {
        let mut level = AudioLevel::default();
        assert_eq!(level.set_volume(1.7), 1.7);
        assert_eq!(level.set_volume(-0.2), -0.2);
        assert!(!level.is_muted());
    }
}
