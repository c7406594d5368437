//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the game thread.
//
// Components:
// - `interface`: messages crossing the thread boundary
// - `event_collector`: game-side polling of the platform channel
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, TickControl};
pub use interface::{GameSignal, PlatformEvent};
