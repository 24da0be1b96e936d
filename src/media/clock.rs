//! Clock-driven media surface.
//!
//! Stands in for a platform video element: the position advances with the
//! wall clock from the moment `play` is called, the same way the playback
//! state anchors a start instant and a start position. Nothing is decoded.

use std::time::{Duration, Instant};

use crate::media::surface::{MediaEvent, MediaSurface, SurfaceError};

/// Default spacing between `TimeAdvanced` callbacks while playing
pub const DEFAULT_TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

/// Media surface whose position is derived from `Instant`s
#[derive(Debug)]
pub struct ClockSurface {
    duration: f64,
    /// Position while paused, or the start position of the running anchor
    position: f64,
    /// Instant playback (re)started; `None` while paused
    started_at: Option<Instant>,
    volume: f64,
    muted: bool,
    metadata_reported: bool,
    time_jumped: bool,
    last_time_update: Option<Instant>,
    time_update_interval: Duration,
}

impl ClockSurface {
    /// Open a surface for media of the given length (seconds)
    pub fn open(duration: f64) -> Self {
        Self {
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            position: 0.0,
            started_at: None,
            volume: 1.0,
            muted: false,
            metadata_reported: false,
            time_jumped: false,
            last_time_update: None,
            time_update_interval: DEFAULT_TIME_UPDATE_INTERVAL,
        }
    }

    /// Set how often `TimeAdvanced` fires while playing
    pub fn with_time_update_interval(mut self, interval: Duration) -> Self {
        self.time_update_interval = interval;
        self
    }

    /// Position at `now`, capped at the media length
    pub fn position_at(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start).as_secs_f64();
                (self.position + elapsed).min(self.duration)
            }
            None => self.position,
        }
    }

    /// Advance the surface to `now` and collect the callbacks it emits.
    ///
    /// Metadata is reported on the first tick. While playing, a time update
    /// fires once per interval. Starting, pausing, seeking and reaching the
    /// end each fire one immediately. Reaching the end pauses the surface.
    pub fn tick(&mut self, now: Instant) -> Vec<MediaEvent> {
        let mut events = Vec::new();

        if !self.metadata_reported {
            self.metadata_reported = true;
            events.push(MediaEvent::MetadataLoaded);
        }

        if self.started_at.is_some() {
            let position = self.position_at(now);
            if position >= self.duration {
                self.position = self.duration;
                self.started_at = None;
                self.time_jumped = true;
                log::debug!("Media reached its end at {:.3}s", self.duration);
            } else {
                let due = self
                    .last_time_update
                    .map_or(true, |last| now.saturating_duration_since(last) >= self.time_update_interval);
                if due {
                    self.time_jumped = true;
                }
            }
        }

        if self.time_jumped {
            self.time_jumped = false;
            self.last_time_update = Some(now);
            events.push(MediaEvent::TimeAdvanced);
        }

        events
    }

    fn seek_at(&mut self, seconds: f64, now: Instant) {
        let target = if seconds.is_nan() {
            0.0
        } else {
            seconds.clamp(0.0, self.duration)
        };
        self.position = target;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
        self.time_jumped = true;
    }

    fn play_at(&mut self, now: Instant) {
        if self.started_at.is_some() {
            return;
        }
        if self.position >= self.duration {
            // Playing from the end restarts, as a video element does
            self.position = 0.0;
        }
        self.started_at = Some(now);
        self.time_jumped = true;
    }

    fn pause_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            return;
        }
        self.position = self.position_at(now);
        self.started_at = None;
        self.time_jumped = true;
    }
}

impl MediaSurface for ClockSurface {
    fn current_time(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.seek_at(seconds, Instant::now());
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = if volume.is_nan() { self.volume } else { volume.clamp(0.0, 1.0) };
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn paused(&self) -> bool {
        self.started_at.is_none()
    }

    fn play(&mut self) -> Result<(), SurfaceError> {
        self.play_at(Instant::now());
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }
}
