//! Audio level handling.
//!
//! The player produces no sound itself; it only tracks the volume and mute
//! flag it writes to the media surface.

pub mod level;

pub use level::{AudioLevel, UNMUTED_VOLUME};
