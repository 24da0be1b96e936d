//! Test doubles that record every request made to the host platform.

use crate::media::surface::{FullscreenHost, MediaSurface, SurfaceError};

/// A request observed by a recording double
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
    SetMuted(bool),
    RequestFullscreen,
    ExitFullscreen,
}

/// Media surface that stores writes verbatim and logs them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub paused: bool,
    pub reject_play: bool,
}

impl RecordingSurface {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            volume: 1.0,
            paused: true,
            ..Self::default()
        }
    }

    pub fn rejecting_play(mut self) -> Self {
        self.reject_play = true;
        self
    }
}

impl MediaSurface for RecordingSurface {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.calls.push(SurfaceCall::SetCurrentTime(seconds));
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(SurfaceCall::SetVolume(volume));
        self.volume = volume;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(SurfaceCall::SetMuted(muted));
        self.muted = muted;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::Play);
        if self.reject_play {
            return Err(SurfaceError::PlayRejected("autoplay blocked".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(SurfaceCall::Pause);
        self.paused = true;
    }
}

/// Fullscreen host that logs requests and can be told to deny entry
#[derive(Debug, Default)]
pub struct RecordingFullscreen {
    pub calls: Vec<SurfaceCall>,
    pub deny: bool,
}

impl FullscreenHost for RecordingFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::RequestFullscreen);
        if self.deny {
            return Err(SurfaceError::FullscreenDenied("no user gesture".to_string()));
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::ExitFullscreen);
        Ok(())
    }
}
