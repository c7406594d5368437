//=========================================================================
// Sidescroll Runtime — Library Root
//
// Frame-driven runtime core of a side-scrolling action game.
//
// Layers:
//   core        frame loop, game modes, input, events, services, errors
//   data        player profile and shared game data types
//   game_logic  level simulation (bevy_ecs world, interaction resolver)
//   modes       intro, main menu and play mode
//   platform    winit window and keyboard (private)
//   engine      builder wiring platform and game thread together
//
// Typical usage:
// ```no_run
// use sidescroll_runtime::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod data;
pub mod game_logic;
pub mod modes;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

#[cfg(test)]
pub mod testing;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
