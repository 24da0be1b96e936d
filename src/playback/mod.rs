//! Player state, events and the widget that applies them.

pub mod event;
pub mod seek;
pub mod state;
pub mod widget;

pub use event::{EventQueue, PlayerEvent};
pub use state::PlayerState;
pub use widget::{InputError, PlaybackWidget};
