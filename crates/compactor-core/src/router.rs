/// Response router -- decodes inbound payloads and feeds the state machine.
///
/// Messages are processed strictly in arrival order, one at a time, each to
/// completion before the next.
use crossbeam_channel::Receiver;
use tracing::warn;

use crate::presentation::{PresentationMachine, RenderIntent};
use crate::protocol::{codec, Event};

/// Maximum number of inbound messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. a burst of status updates while the window was
/// hidden) from blocking the render thread for a perceptible duration.
pub const MAX_MESSAGES_PER_FRAME: usize = 300;

#[derive(Debug, Default)]
pub struct ResponseRouter {
    machine: PresentationMachine,
}

impl ResponseRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machine(&self) -> &PresentationMachine {
        &self.machine
    }

    pub fn intent(&self) -> RenderIntent {
        self.machine.intent()
    }

    /// Decode one wire payload and apply it. Returns `true` if an event was
    /// applied; unrecognized and malformed payloads change nothing.
    pub fn route(&mut self, payload: &str) -> bool {
        match codec::decode(payload) {
            Ok(Some(event)) => {
                self.machine.apply(event);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Dropping malformed message: {e}");
                false
            }
        }
    }

    /// Apply an event raised locally by the renderer, such as page navigation.
    pub fn route_event(&mut self, event: Event) {
        self.machine.apply(event);
    }

    /// Drain pending payloads without blocking, up to
    /// [`MAX_MESSAGES_PER_FRAME`]. Returns `true` if the UI should repaint.
    pub fn drain(&mut self, rx: &Receiver<String>) -> bool {
        let mut repaint = false;
        for payload in rx.try_iter().take(MAX_MESSAGES_PER_FRAME) {
            repaint |= self.route(&payload);
        }
        repaint
    }
}
