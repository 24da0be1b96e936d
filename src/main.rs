//! Main application entry point.
//!
//! This module uses eframe to bootstrap the application with winit/wgpu/egui integration.
//! The HostPage from src/ui/app.rs is used as the main application UI.

use eframe::egui;
use video_widget::settings::PlayerSettings;
use video_widget::ui::HostPage;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = PlayerSettings::load();

    // Configure native options for the window
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([640.0, 520.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    log::info!("Starting player for {}", settings.media_title);

    eframe::run_native(
        "video-widget",
        native_options,
        Box::new(|cc| Box::new(HostPage::new(cc, settings))),
    )
}
