//=========================================================================
// Engine
//
// Entry point that wires the platform to the game thread.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_options()          ├─ spawns the game thread
//         ├─ with_target_fps()       ├─ runs the platform (main thread)
//         ├─ with_max_frame_delta()  └─ joins, returns the game result
//         └─ with_channel_capacity()
// ```
//
// Shutdown:
//   window closed → PlatformEvent::WindowClosed → game loop ends
//   game quits    → GameSignal::Shutdown        → event loop exits
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::{GameOptions, LoopConfig};
use crate::core::error::GameError;
use crate::core::mode::{Collaborators, ModeController};
use crate::core::platform_bridge::{EventCollector, GameSignal, PlatformEvent};
use crate::modes::StandardModeFactory;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Options**: intro, music on, no FPS display
/// - **Target FPS**: 60.0
/// - **Max frame delta**: 250 ms
/// - **Channel capacity**: 128 batches
///
/// # Examples
///
/// ```no_run
/// use sidescroll_runtime::EngineBuilder;
/// use sidescroll_runtime::core::config::GameOptions;
///
/// let options = GameOptions {
///     skip_intro: true,
///     ..GameOptions::default()
/// };
///
/// EngineBuilder::new()
///     .with_options(options)
///     .with_target_fps(70.0)
///     .build()
///     .run()
///     .expect("game failed");
/// ```
pub struct EngineBuilder {
    options: GameOptions,
    loop_config: LoopConfig,
    channel_capacity: usize,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            options: GameOptions::default(),
            loop_config: LoopConfig::default(),
            channel_capacity: 128,
        }
    }

    pub fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the frame rate the game loop sleeps towards.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "Target FPS must be positive, got {}", fps);
        self.loop_config.target_fps = Some(fps);
        self
    }

    /// Caps the frame delta handed to modes after a stall.
    pub fn with_max_frame_delta(mut self, max_frame_delta: Duration) -> Self {
        self.loop_config.max_frame_delta = max_frame_delta;
        self
    }

    /// Sets the capacity of the platform → game channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (fps: {:?}, channel: {})",
            self.loop_config.target_fps, self.channel_capacity
        );

        Engine {
            options: self.options,
            loop_config: self.loop_config,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// ```text
/// Engine::run (main thread)
///   ├─► game thread: ModeController::run
///   │     └─► Intro / Menu / Playing modes
///   │
///   └─► Platform (winit event loop)
///
/// PlatformEvent ──► game thread
/// GameSignal    ◄── game thread
/// ```
pub struct Engine {
    options: GameOptions,
    loop_config: LoopConfig,
    channel_capacity: usize,
}

impl Engine {
    /// Runs the game until the player quits or closes the window.
    ///
    /// Must be called on the main thread.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the game loop, a platform failure, or
    /// `GameThreadPanicked`.
    pub fn run(self) -> Result<(), GameError> {
        info!("Engine starting");

        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (signal_tx, signal_rx) = bounded(1);

        let game_thread = spawn_game_thread(self.options, self.loop_config, event_rx, signal_tx);

        let platform_result = Platform::new(event_tx, signal_rx).run();
        info!("Platform event loop exited");

        let game_result = match game_thread.join() {
            Ok(result) => result,
            Err(_) => {
                error!("Game thread panicked");
                Err(GameError::GameThreadPanicked)
            }
        };

        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        platform_result?;
        game_result?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

/// Runs the mode controller on its own thread. The window is told to
/// close whenever the game loop ends, with or without an error.
fn spawn_game_thread(
    options: GameOptions,
    loop_config: LoopConfig,
    events: Receiver<PlatformEvent>,
    signals: Sender<GameSignal>,
) -> JoinHandle<Result<(), GameError>> {
    thread::spawn(move || {
        let mut controller = ModeController::new(
            Collaborators::headless(),
            Box::new(StandardModeFactory::new()),
            loop_config,
        );
        let mut collector = EventCollector::new(events);

        let result = controller.run(&options, &mut collector);

        if signals.send(GameSignal::Shutdown).is_err() {
            warn!(target: "platform", "Platform gone before shutdown signal");
        }
        result
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.options, GameOptions::default());
        assert_eq!(builder.loop_config, LoopConfig::default());
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_sets_loop_parameters() {
        let builder = EngineBuilder::new()
            .with_target_fps(35.0)
            .with_max_frame_delta(Duration::from_millis(100));

        assert_eq!(builder.loop_config.target_fps, Some(35.0));
        assert_eq!(builder.loop_config.max_frame_delta, Duration::from_millis(100));
    }

    #[test]
    fn builder_keeps_options() {
        let options = GameOptions {
            level_to_jump_to: Some((1, 3)),
            enable_music: false,
            ..GameOptions::default()
        };

        let engine = EngineBuilder::new().with_options(options.clone()).build();
        assert_eq!(engine.options, options);
    }

    #[test]
    #[should_panic(expected = "Target FPS must be positive")]
    fn builder_with_target_fps_panics_on_zero() {
        EngineBuilder::new().with_target_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn game_thread_stops_on_window_close_and_signals_shutdown() {
        let (event_tx, event_rx) = bounded(4);
        let (signal_tx, signal_rx) = bounded(1);
        event_tx.send(PlatformEvent::WindowClosed).unwrap();

        let options = GameOptions {
            skip_intro: true,
            enable_music: false,
            ..GameOptions::default()
        };
        let handle = spawn_game_thread(options, LoopConfig::default(), event_rx, signal_tx);

        assert!(handle.join().unwrap().is_ok());
        assert_eq!(signal_rx.try_recv(), Ok(GameSignal::Shutdown));
    }

    #[test]
    fn game_thread_reports_errors_and_still_signals_shutdown() {
        let (_event_tx, event_rx) = bounded(4);
        let (signal_tx, signal_rx) = bounded(1);

        let options = GameOptions {
            level_to_jump_to: Some((9, 1)),
            ..GameOptions::default()
        };
        let handle = spawn_game_thread(options, LoopConfig::default(), event_rx, signal_tx);

        assert!(matches!(handle.join().unwrap(), Err(GameError::Resource(_))));
        assert_eq!(signal_rx.try_recv(), Ok(GameSignal::Shutdown));
    }
}
