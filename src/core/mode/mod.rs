//=========================================================================
// Game Modes
//=========================================================================
//
// Top-level game states (intro, menu, level play) and their lifecycle.
//
// Architecture:
//   ModeController
//     ├─ current: Option<Box<dyn GameMode>>
//     ├─ ModeRequestSlot (pending switch, quit)
//     └─ ModeFactory → new mode on transition
//
// Lifecycle of a mode:
//   create_mode(ctx) → (handle_event | update_and_render)* → drop
//
// At most one mode is alive at any time. The outgoing mode is dropped
// before the factory builds its successor.
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod controller;
mod fader;
mod request;

//=== Public API ==========================================================

pub use context::{Collaborators, ModeContext};
pub use controller::ModeController;
pub use fader::ScreenFader;
pub use request::{ModeRequest, ModeRequestSlot};

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;
use crate::core::input::InputEvent;

//=== GameMode Trait ======================================================

/// One top-level game state.
///
/// Modes get a fresh [`ModeContext`] for every call and must not keep
/// references to it. Switching modes goes through the service provider's
/// `schedule_*` calls.
pub trait GameMode {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Called for every input event, before the frame's update.
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>);

    /// Advances the mode by `dt` and draws it into the current frame.
    ///
    /// Errors end the run loop.
    fn update_and_render(&mut self, dt: Duration, ctx: &mut ModeContext<'_>)
        -> Result<(), GameError>;
}

//=== ModeFactory Trait ===================================================

/// Builds the mode for a request.
pub trait ModeFactory {
    fn create_mode(
        &mut self,
        request: ModeRequest,
        ctx: &mut ModeContext<'_>,
    ) -> Result<Box<dyn GameMode>, GameError>;
}
