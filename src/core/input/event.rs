//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-side representation of keyboard input.
//
// Abstracts platform-specific key events (winit) into a small, portable
// format consumed by game modes and the state tracker.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    ModeController → active GameMode
//         ↓
//    StateTracker → PlayerInput
// ```
//
// The game is keyboard-only; pointer input is never forwarded.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key in a simplified, cross-platform form.
///
/// Only the keys the game binds or the menus react to are listed.
/// Everything else maps to `Unidentified` and is filtered by the
/// platform layer before it reaches a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Digits -----------------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letters ----------------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrows -----------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Control keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    ControlLeft,
    AltLeft,

    //--- Function keys ----------------------------------------------------
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Key the engine has no mapping for.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Discrete keyboard event delivered to the active game mode.
///
/// Key repeat events are filtered by the platform layer: a held key
/// produces exactly one `KeyDown` followed by one `KeyUp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns the key carried by this event.
    pub fn key(&self) -> KeyCode {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => *key,
        }
    }

    /// Returns `true` for a `KeyDown` of the given key.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        matches!(self, Self::KeyDown(k) if *k == key)
    }
}

//=========================================================================
// Tests
//=========================================================================
