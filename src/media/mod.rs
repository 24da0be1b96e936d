//! Host media surface contracts and the clock-driven surface the app runs on.

pub mod clock;
pub mod surface;
#[cfg(test)]
pub(crate) mod recording;

pub use clock::ClockSurface;
pub use surface::{FullscreenHost, MediaEvent, MediaSurface, SurfaceError};
