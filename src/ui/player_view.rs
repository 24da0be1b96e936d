//! egui rendering of the player controls.
//!
//! The view never mutates the widget. Each interaction becomes a
//! [`PlayerEvent`] on the queue so it is handled in delivery order once the
//! frame has been laid out.

use crossbeam::channel::Sender;
use egui::{Align, Align2, Color32, FontId, Layout, Rect, RichText, Sense, Ui};

use crate::core::time::format_time;
use crate::playback::event::PlayerEvent;
use crate::playback::state::PlayerState;

/// Height of the clickable seek bar
const SEEK_BAR_HEIGHT: f32 = 8.0;
/// Media frame aspect ratio (height / width)
const FRAME_ASPECT: f32 = 9.0 / 16.0;
/// Widest the media frame grows outside fullscreen
const MAX_FRAME_WIDTH: f32 = 512.0;

/// What the surface reports, sampled once per frame before drawing
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceSnapshot {
    pub position: f64,
    pub duration: f64,
    pub desynced: bool,
}

/// Filled share of the seek bar for the given surface position
pub fn progress_fraction(position: f64, duration: f64) -> f32 {
    if duration.is_nan() || duration <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    (position / duration).clamp(0.0, 1.0) as f32
}

/// Where each control landed in the last layout pass
#[derive(Debug, Clone, Copy)]
pub struct PlayerViewLayout {
    pub frame: Rect,
    pub play: Rect,
    pub mute: Rect,
    pub volume: Rect,
    pub fullscreen: Rect,
    pub seek_bar: Rect,
}

impl Default for PlayerViewLayout {
    fn default() -> Self {
        Self {
            frame: Rect::NOTHING,
            play: Rect::NOTHING,
            mute: Rect::NOTHING,
            volume: Rect::NOTHING,
            fullscreen: Rect::NOTHING,
            seek_bar: Rect::NOTHING,
        }
    }
}

/// Player controls view
pub struct PlayerView {
    media_title: String,
}

impl PlayerView {
    pub fn new(media_title: impl Into<String>) -> Self {
        Self {
            media_title: media_title.into(),
        }
    }

    /// Draw the media frame and controls, sending interactions to `events`
    pub fn show(
        &self,
        ui: &mut Ui,
        state: &PlayerState,
        snapshot: SurfaceSnapshot,
        events: &Sender<PlayerEvent>,
    ) -> PlayerViewLayout {
        let mut layout = PlayerViewLayout::default();
        let send = |event: PlayerEvent| {
            if events.send(event).is_err() {
                log::error!("Player event queue closed");
            }
        };

        let width = if state.is_full_screen {
            ui.available_width()
        } else {
            ui.available_width().min(MAX_FRAME_WIDTH)
        };

        ui.vertical_centered(|ui| {
            ui.set_max_width(width);

            // Media frame: clicking it toggles playback
            let (frame_rect, frame_response) =
                ui.allocate_exact_size(egui::vec2(width, width * FRAME_ASPECT), Sense::click());
            let painter = ui.painter();
            painter.rect_filled(frame_rect, 8.0, Color32::BLACK);
            painter.text(
                frame_rect.center(),
                Align2::CENTER_CENTER,
                &self.media_title,
                FontId::proportional(16.0),
                Color32::from_gray(200),
            );
            layout.frame = frame_rect;
            if frame_response.clicked() {
                send(PlayerEvent::TogglePlay);
            }

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let play_label = if state.is_playing { "⏹" } else { "▶" };
                let play = ui.button(RichText::new(play_label).size(24.0));
                layout.play = play.rect;
                let play = if snapshot.desynced && state.is_playing {
                    play.on_hover_text("Waiting for playback to start")
                } else {
                    play
                };
                if play.clicked() {
                    send(PlayerEvent::TogglePlay);
                }

                let mute_label = if state.is_muted() { "🔇" } else { "🔊" };
                let mute = ui.button(RichText::new(mute_label).size(20.0));
                layout.mute = mute.rect;
                if mute.clicked() {
                    send(PlayerEvent::ToggleMute);
                }

                let mut volume = state.volume();
                let slider = ui.add(
                    egui::Slider::new(&mut volume, 0.0..=1.0)
                        .step_by(0.01)
                        .show_value(false),
                );
                layout.volume = slider.rect;
                if slider.changed() {
                    send(PlayerEvent::VolumeInput(volume));
                }

                let fullscreen_label = if state.is_full_screen {
                    "Exit fullscreen"
                } else {
                    "Fullscreen"
                };
                let fullscreen = ui.button(fullscreen_label);
                layout.fullscreen = fullscreen.rect;
                if fullscreen.clicked() {
                    send(PlayerEvent::ToggleFullScreen);
                }
            });

            ui.horizontal(|ui| {
                ui.label(format_time(state.current_time));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(format_time(state.duration as f64));
                });
            });

            // Seek bar
            let (bar_rect, bar_response) =
                ui.allocate_exact_size(egui::vec2(width, SEEK_BAR_HEIGHT), Sense::click());
            layout.seek_bar = bar_rect;
            let progress = progress_fraction(snapshot.position, snapshot.duration);
            let painter = ui.painter();
            painter.rect_filled(bar_rect, 4.0, Color32::from_gray(190));
            let mut fill_rect = bar_rect;
            fill_rect.set_width(bar_rect.width() * progress);
            painter.rect_filled(fill_rect, 4.0, Color32::from_rgb(59, 130, 246));

            if bar_response.clicked() {
                if let Some(pos) = bar_response.interact_pointer_pos() {
                    send(PlayerEvent::SeekClick {
                        click_x: f64::from(pos.x),
                        bar_left: f64::from(bar_rect.min.x),
                        bar_width: f64::from(bar_rect.width()),
                    });
                }
            }
        });

        layout
    }
}
