//! Fullscreen through egui viewport commands.

use eframe::egui::{Context, ViewportCommand};

use crate::media::surface::{FullscreenHost, SurfaceError};

/// Fullscreen host backed by the root egui viewport.
///
/// The command is queued for the windowing backend; whether the window
/// manager honours it is not observed.
#[derive(Clone)]
pub struct ViewportFullscreen {
    ctx: Context,
}

impl ViewportFullscreen {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl FullscreenHost for ViewportFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), SurfaceError> {
        self.ctx.send_viewport_cmd(ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
        self.ctx.send_viewport_cmd(ViewportCommand::Fullscreen(false));
        Ok(())
    }
}
