//=========================================================================
// Input
//=========================================================================
//
// Keyboard input as seen by game modes.
//
// Architecture:
//   Platform → InputEvent → GameMode::handle_event()
//                               ↓
//                          StateTracker → PlayerInput (per frame)
//
// Modes that need held/pressed queries own a StateTracker and feed it the
// events they receive; menus usually react to the events directly.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod player_input;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};
pub use player_input::{Button, KeyBindings, PlayerAction, PlayerInput};
pub use state_tracker::StateTracker;
