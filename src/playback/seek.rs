//! Seek bar geometry: horizontal click position to playback position.

/// Fraction of the bar left of `click_x`.
///
/// Not clamped: honest pointer coordinates land inside the bar and give a
/// value in [0, 1], anything else passes through as is.
#[inline]
pub fn seek_fraction(click_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    (click_x - bar_left) / bar_width
}

/// Position (seconds) a click maps to for media of `duration` seconds
#[inline]
pub fn seek_target(click_x: f64, bar_left: f64, bar_width: f64, duration: f64) -> f64 {
    seek_fraction(click_x, bar_left, bar_width) * duration
}
