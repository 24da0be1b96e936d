//! Player events and the ordered queue that carries them to the widget.
//! Uses crossbeam channels so UI code and surface callbacks share one FIFO.

use crossbeam::channel;

use crate::media::surface::MediaEvent;

/// Event delivered to the playback widget
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    TogglePlay,
    ToggleMute,
    /// Volume slider moved
    VolumeInput(f64),
    /// Seek bar clicked at `click_x` (bar spans `bar_left..bar_left + bar_width`)
    SeekClick {
        click_x: f64,
        bar_left: f64,
        bar_width: f64,
    },
    ToggleFullScreen,
    MetadataLoaded,
    TimeAdvanced,
}

impl From<MediaEvent> for PlayerEvent {
    fn from(event: MediaEvent) -> Self {
        match event {
            MediaEvent::MetadataLoaded => PlayerEvent::MetadataLoaded,
            MediaEvent::TimeAdvanced => PlayerEvent::TimeAdvanced,
        }
    }
}

/// FIFO of pending player events
pub struct EventQueue {
    event_tx: channel::Sender<PlayerEvent>,
    event_rx: channel::Receiver<PlayerEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        let (event_tx, event_rx) = channel::unbounded();
        Self { event_tx, event_rx }
    }

    /// Handle for producers (views, surface callbacks)
    pub fn sender(&self) -> channel::Sender<PlayerEvent> {
        self.event_tx.clone()
    }

    /// Enqueue an event
    pub fn push(&self, event: PlayerEvent) {
        // The queue owns a receiver, so the channel cannot be disconnected
        let _ = self.event_tx.send(event);
    }

    pub fn is_empty(&self) -> bool {
        self.event_rx.is_empty()
    }

    /// Take every pending event, oldest first
    pub fn drain(&self) -> Vec<PlayerEvent> {
        self.event_rx.try_iter().collect()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
