//=========================================================================
// Core
//=========================================================================
//
// Runtime infrastructure that runs on the game thread.
//
// Architecture:
// ```text
//   platform_bridge (EventCollector)
//         ↓ InputEvent batches
//   mode (ModeController → active GameMode)
//         ↓ ModeContext
//   services (audio, rendering, scripts, resources, profile, clock)
//
//   events   per-frame outbox between game logic and the play mode
//   input    key events, held-key tracking, per-tick player input
//   config   options and loop pacing
//   error    error taxonomy
//   math     tile-space vectors and rectangles
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod math;
pub mod mode;
pub mod platform_bridge;
pub mod services;
