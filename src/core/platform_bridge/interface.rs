//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages exchanged between the platform thread and the game thread.
//
//   platform ──PlatformEvent──→ game thread
//   platform ←──GameSignal───── game thread
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the game thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Keyboard events gathered since the previous redraw, in order.
    Inputs(Vec<InputEvent>),

    /// The window was minimized or fully covered (`true`) or became
    /// visible again (`false`).
    Minimized(bool),

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== GameSignal ==========================================================

/// Signals sent from the game thread back to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    /// The game loop ended; the window should close.
    Shutdown,
}
