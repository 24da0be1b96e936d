//! Core helpers shared by the player.
//!
//! Positions are seconds (`f64`) as the media surface reports them; the
//! stored duration is whole seconds.

pub mod time;

pub use time::{floor_seconds, format_time};
