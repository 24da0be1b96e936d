//! Contracts for the host platform's media surface and fullscreen support.
//!
//! The player never decodes anything itself. It drives a surface through a
//! narrow property set and reacts to the two callbacks the surface emits.

/// Error type for requests the host platform may refuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("Play request rejected: {0}")]
    PlayRejected(String),
    #[error("Fullscreen request denied: {0}")]
    FullscreenDenied(String),
}

/// Callbacks emitted by a media surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and dimensions became available
    MetadataLoaded,
    /// Playback position advanced (or jumped after a seek)
    TimeAdvanced,
}

/// A playable media element owned by the host platform
pub trait MediaSurface {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds; not meaningful before metadata has loaded
    fn duration(&self) -> f64;

    /// Audio gain
    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Whether the surface is currently paused
    fn paused(&self) -> bool;

    /// Ask the surface to start playing. The platform may refuse.
    fn play(&mut self) -> Result<(), SurfaceError>;

    fn pause(&mut self);
}

/// Platform-level fullscreen presentation
pub trait FullscreenHost {
    /// Ask for the media surface to occupy the whole viewport
    fn request_fullscreen(&mut self) -> Result<(), SurfaceError>;

    /// Leave fullscreen presentation
    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError>;
}
