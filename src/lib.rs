//! A video player widget: transport controls kept in sync with a host media
//! surface, plus the egui page that hosts it.

pub mod audio;
pub mod core;
pub mod media;
pub mod playback;
pub mod settings;
pub mod ui;
