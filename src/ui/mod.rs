//! UI module for the egui-based player page.

pub mod app;
pub mod player_view;
pub mod viewport;

pub use app::HostPage;
pub use player_view::PlayerView;
pub use viewport::ViewportFullscreen;
