//! Playback widget: keeps player state in step with a media surface.
//!
//! Every handler runs to completion and returns immediately. Requests the
//! platform may refuse (play, fullscreen) are fire-and-forget; a refusal is
//! logged and the state keeps whatever the user asked for.

use crate::core::time::floor_seconds;
use crate::media::surface::{FullscreenHost, MediaSurface};
use crate::playback::event::PlayerEvent;
use crate::playback::seek::seek_target;
use crate::playback::state::PlayerState;

/// Error type for raw control input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid volume input {raw:?}: {source}")]
    Volume {
        raw: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Video player widget bound to a media surface and a fullscreen host
pub struct PlaybackWidget<S, F> {
    state: PlayerState,
    surface: S,
    fullscreen: F,
}

impl<S: MediaSurface, F: FullscreenHost> PlaybackWidget<S, F> {
    /// Create a widget driving `surface`.
    ///
    /// The starting volume is written to the surface so the slider and the
    /// audible level agree before the user touches anything.
    pub fn new(mut surface: S, fullscreen: F, volume: f64) -> Self {
        let state = PlayerState::new(volume);
        surface.set_volume(state.volume());

        Self {
            state,
            surface,
            fullscreen,
        }
    }

    /// Get the current player state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Get the media surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get mutable media surface reference
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the state claims playback while the surface is paused, or
    /// the other way round (refused play, media ended)
    pub fn is_desynced(&self) -> bool {
        self.state.is_playing == self.surface.paused()
    }

    /// Route an event to its handler
    pub fn dispatch(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::TogglePlay => self.toggle_play(),
            PlayerEvent::ToggleMute => self.toggle_mute(),
            PlayerEvent::VolumeInput(value) => self.on_volume_input_changed(value),
            PlayerEvent::SeekClick {
                click_x,
                bar_left,
                bar_width,
            } => self.on_seek_bar_clicked(click_x, bar_left, bar_width),
            PlayerEvent::ToggleFullScreen => self.toggle_full_screen(),
            PlayerEvent::MetadataLoaded => self.on_metadata_loaded(),
            PlayerEvent::TimeAdvanced => self.on_time_advanced(),
        }
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        let was_playing = self.state.is_playing;
        self.state.is_playing = !was_playing;

        if was_playing {
            self.surface.pause();
            log::debug!("Paused at {:.3}s", self.surface.current_time());
        } else if let Err(e) = self.surface.play() {
            log::warn!("{e}");
        } else {
            log::debug!("Playing from {:.3}s", self.surface.current_time());
        }
    }

    /// Store the surface's length, floored to whole seconds
    pub fn on_metadata_loaded(&mut self) {
        self.state.duration = floor_seconds(self.surface.duration());
        log::debug!("Metadata loaded: duration {}s", self.state.duration);
    }

    /// Store the surface's position verbatim
    pub fn on_time_advanced(&mut self) {
        self.state.current_time = self.surface.current_time();
    }

    /// Apply a volume picked on the slider.
    ///
    /// The slider restricts values to [0, 1] in steps of 0.01; nothing here
    /// checks that again.
    pub fn on_volume_input_changed(&mut self, value: f64) {
        let volume = self.state.audio.set_volume(value);
        self.surface.set_volume(volume);
        log::debug!("Volume set to {volume}");
    }

    /// Parse raw volume text and apply it.
    ///
    /// Text that is not a float is rejected without touching any state.
    pub fn on_volume_text_changed(&mut self, raw: &str) -> Result<(), InputError> {
        let value = raw.trim().parse::<f64>().map_err(|source| InputError::Volume {
            raw: raw.to_string(),
            source,
        })?;
        self.on_volume_input_changed(value);
        Ok(())
    }

    /// Flip the mute flag.
    ///
    /// Unmuting always restores the default volume, not the level in use
    /// before muting.
    pub fn toggle_mute(&mut self) {
        let muted = self.state.audio.toggle_muted();
        self.surface.set_muted(muted);
        log::debug!("Muted: {muted}, volume {}", self.state.volume());
    }

    /// Seek to the position under a click on the seek bar
    pub fn on_seek_bar_clicked(&mut self, click_x: f64, bar_left: f64, bar_width: f64) {
        let target = seek_target(click_x, bar_left, bar_width, self.surface.duration());
        self.surface.set_current_time(target);
        log::debug!("Seek to {target:.3}s");
    }

    /// Enter or leave fullscreen presentation
    pub fn toggle_full_screen(&mut self) {
        let entering = !self.state.is_full_screen;
        self.state.is_full_screen = entering;

        let result = if entering {
            self.fullscreen.request_fullscreen()
        } else {
            self.fullscreen.exit_fullscreen()
        };
        match result {
            Ok(()) => log::debug!("Fullscreen: {entering}"),
            Err(e) => log::warn!("{e}"),
        }
    }
}
