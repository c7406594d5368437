//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the game thread over crossbeam
// channels.
//
// Architecture:
// ```text
//  Main Thread:                     Game Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  winit Event Loop        │    │  ModeController  │
//  │   ↓                      │    │   ↑              │
//  │  InputProcessor          │    │  EventCollector  │
//  │   ├─ drops repeats       │    │                  │
//  │   └─ drops unmapped keys │    └──────────────────┘
//  │   ↓                      │         ↑       │
//  │  pending batch           │         │       │
//  │   ↓                      │         │       │
//  │  RedrawRequested (flush) ┼─────────┘       │
//  │                          │  PlatformEvent  │
//  │  about_to_wait           ◄─────────────────┘
//  │   └─ Shutdown? → exit    │    GameSignal
//  └──────────────────────────┘
// ```
//
// RedrawRequested is the frame boundary: everything typed since the last
// redraw goes out as one batch. A full channel keeps the batch pending
// until the next redraw instead of blocking the event loop.
//
// winit requires the main thread on macOS/iOS, so this runs on the thread
// that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{GameSignal, PlatformEvent};
use input_processor::InputProcessor;

//=== Constants ===========================================================

const WINDOW_TITLE: &str = "Sidescroll";

/// Twice the 320x200 game screen.
const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 400;

/// How often the shutdown channel is checked while no redraws arrive
/// (window minimized or occluded).
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(50);

//=== Platform ============================================================

/// Window owner and keyboard event aggregator.
///
/// Not `Send`: it stays on the main thread. The game thread is reached
/// only through the two channels.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    pending: Vec<InputEvent>,
    event_sender: Sender<PlatformEvent>,
    signals: Receiver<GameSignal>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, signals: Receiver<GameSignal>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            pending: Vec::new(),
            event_sender,
            signals,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window is closed or the game
    /// thread signals shutdown.
    ///
    /// # Errors
    ///
    /// `CreateEventLoop` if no event loop can be created (no display,
    /// not on the main thread), `EventLoopRun` if winit fails while
    /// running.
    pub fn run(mut self) -> Result<(), GameError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(GameError::CreateEventLoop)?;
        event_loop
            .run_app(&mut self)
            .map_err(GameError::EventLoopRun)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the pending batch to the game thread.
    ///
    /// Empty batches are not sent. A full channel keeps the events for
    /// the next attempt; a disconnected one drops them.
    fn flush_input_buffer(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        trace!(target: "platform", "Flushing {} input events", count);

        match self.event_sender.try_send(PlatformEvent::Inputs(batch)) {
            Ok(()) => {}
            Err(TrySendError::Full(PlatformEvent::Inputs(batch))) => {
                trace!(target: "platform", "Channel full, keeping {} events", count);
                self.pending = batch;
            }
            Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform", "Channel disconnected, dropping {} events", count);
            }
        }
    }

    /// Sends a non-input notification. Blocks while the channel is full.
    fn notify(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            debug!(target: "platform", "Game thread gone, notification dropped");
        }
    }

    /// `true` once the game thread asked to close the window or went away.
    fn shutdown_requested(&self) -> bool {
        match self.signals.try_recv() {
            Ok(GameSignal::Shutdown) => {
                info!(target: "platform", "Shutdown requested by game thread");
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                debug!(target: "platform", "Game thread signal channel closed");
                true
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.flush_input_buffer();
                self.notify(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Occluded(occluded) => {
                debug!(target: "platform", "Window occluded: {}", occluded);
                self.notify(PlatformEvent::Minimized(*occluded));
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.pending.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shutdown_requested() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + SHUTDOWN_POLL_INTERVAL,
        ));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
