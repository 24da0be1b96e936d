//! Host page: a heading above a single player.
//!
//! This implementation uses eframe::App for window management and event handling.

use std::time::{Duration, Instant};

use eframe::egui::{CentralPanel, Context, TopBottomPanel};
use eframe::{App, CreationContext};

use crate::media::clock::ClockSurface;
use crate::media::surface::MediaSurface;
use crate::playback::event::EventQueue;
use crate::playback::widget::PlaybackWidget;
use crate::settings::PlayerSettings;
use crate::ui::player_view::{PlayerView, SurfaceSnapshot};
use crate::ui::viewport::ViewportFullscreen;

/// Player driving the clock surface inside an egui viewport
pub type ClockPlayer = PlaybackWidget<ClockSurface, ViewportFullscreen>;

/// Main application page
pub struct HostPage {
    heading: String,
    player: ClockPlayer,
    view: PlayerView,
    events: EventQueue,
    repaint_interval: Duration,
}

impl HostPage {
    /// Create the page
    ///
    /// Called by eframe during application initialization.
    pub fn new(cc: &CreationContext<'_>, settings: PlayerSettings) -> Self {
        Self::with_context(cc.egui_ctx.clone(), settings)
    }

    /// Create the page for an existing egui context
    pub fn with_context(ctx: Context, settings: PlayerSettings) -> Self {
        let repaint_interval = settings.time_update_interval();
        let surface = ClockSurface::open(settings.media_duration_secs)
            .with_time_update_interval(repaint_interval);
        let player = PlaybackWidget::new(
            surface,
            ViewportFullscreen::new(ctx),
            settings.initial_volume,
        );

        Self {
            heading: settings.heading,
            player,
            view: PlayerView::new(settings.media_title),
            events: EventQueue::new(),
            repaint_interval,
        }
    }

    /// Get the player
    pub fn player(&self) -> &ClockPlayer {
        &self.player
    }

    /// Dispatch queued events until the surface has nothing more to report.
    ///
    /// Handlers can make the surface jump (seek, play, pause), so the
    /// surface is ticked again after every batch.
    fn deliver_events(&mut self, now: Instant) {
        loop {
            for event in self.player.surface_mut().tick(now) {
                self.events.push(event.into());
            }
            let pending = self.events.drain();
            if pending.is_empty() {
                break;
            }
            for event in pending {
                self.player.dispatch(event);
            }
        }
    }

    /// Deliver pending events, then lay out one frame
    pub fn show(&mut self, ctx: &Context) {
        self.deliver_events(Instant::now());

        TopBottomPanel::top("heading")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(&self.heading);
            });

        let surface = self.player.surface();
        let snapshot = SurfaceSnapshot {
            position: surface.current_time(),
            duration: surface.duration(),
            desynced: self.player.is_desynced(),
        };
        let sender = self.events.sender();

        CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, self.player.state(), snapshot, &sender);
        });

        if !self.events.is_empty() {
            ctx.request_repaint();
        } else if !self.player.surface().paused() {
            ctx.request_repaint_after(self.repaint_interval);
        }
    }
}

impl App for HostPage {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::event::PlayerEvent;
    use eframe::egui::RawInput;

    #[test]
    fn test_first_frame_loads_metadata() {
        let ctx = Context::default();
        let mut page = HostPage::with_context(ctx.clone(), PlayerSettings::default());

        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));

        let state = page.player().state();
        assert_eq!(state.duration, 125);
        assert!(!state.is_playing);
        assert_eq!(state.volume(), 0.5);
        assert_eq!(page.player().surface().volume(), 0.5);
    }

    #[test]
    fn test_seek_while_paused_updates_elapsed_time() {
        let ctx = Context::default();
        let mut page = HostPage::with_context(ctx.clone(), PlayerSettings::default());
        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));

        page.events.push(PlayerEvent::SeekClick {
            click_x: 50.0,
            bar_left: 0.0,
            bar_width: 100.0,
        });
        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));

        assert!(page.player().surface().paused());
        assert_eq!(page.player().surface().current_time(), 62.95);
        assert_eq!(page.player().state().current_time, 62.95);
        assert!(page.events.is_empty());
    }

    #[test]
    fn test_pause_updates_elapsed_time() {
        let ctx = Context::default();
        let mut page = HostPage::with_context(ctx.clone(), PlayerSettings::default());
        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));

        page.events.push(PlayerEvent::TogglePlay);
        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));
        assert!(page.player().state().is_playing);

        page.events.push(PlayerEvent::TogglePlay);
        let _ = ctx.run(RawInput::default(), |ctx| page.show(ctx));

        let player = page.player();
        assert!(!player.state().is_playing);
        assert!(player.surface().paused());
        assert_eq!(player.state().current_time, player.surface().current_time());
    }

    #[test]
    fn test_initial_volume_from_settings() {
        let settings = PlayerSettings {
            initial_volume: 0.0,
            ..Default::default()
        };
        let page = HostPage::with_context(Context::default(), settings);

        assert!(page.player().state().is_muted());
        assert_eq!(page.player().surface().volume(), 0.0);
    }
}
