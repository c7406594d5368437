//=========================================================================
// Event Collector
//=========================================================================
//
// Game-thread side of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input events → TickControl
//
// Polling is bounded per frame so a flood of events cannot starve the
// game loop. Window state (minimized) is tracked across frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events for one frame at a time.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    inputs: Vec<InputEvent>,
    is_minimized: bool,
}

impl EventCollector {
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            inputs: Vec::new(),
            is_minimized: false,
        }
    }

    /// Collects pending platform events.
    ///
    /// Returns `Exit` when the window was closed or the platform side of
    /// the channel went away.
    pub fn collect_frame(&mut self) -> TickControl {
        self.inputs.clear();

        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Platform channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        warn!(
            target: "platform",
            "Event queue backlog: drained {} events this frame",
            MAX_EVENTS_PER_FRAME
        );
        TickControl::Continue
    }

    /// Input events collected by the last `collect_frame`.
    pub fn inputs(&self) -> &[InputEvent] {
        &self.inputs
    }

    /// Takes the collected input events, leaving an empty buffer.
    pub fn take_inputs(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }

    /// Collects pending events and throws the input away.
    ///
    /// Used after a blocking transition so keys pressed during the fade
    /// never reach the new mode. Window state is still honoured.
    pub fn discard_pending_input(&mut self) -> TickControl {
        let control = self.collect_frame();
        if !self.inputs.is_empty() {
            debug!(
                target: "platform",
                "Dropped {} input events received during transition",
                self.inputs.len()
            );
            self.inputs.clear();
        }
        control
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(events) => {
                self.inputs.extend(events);
                TickControl::Continue
            }
            PlatformEvent::Minimized(minimized) => {
                if minimized != self.is_minimized {
                    debug!(target: "platform", "Window minimized: {}", minimized);
                }
                self.is_minimized = minimized;
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
