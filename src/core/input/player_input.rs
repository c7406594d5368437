//=========================================================================
// Player Input
//=========================================================================
//
// Maps tracked keyboard state to the per-frame gameplay input snapshot.
//
// Architecture:
//   StateTracker + KeyBindings (key → PlayerAction) → PlayerInput
//
// A single action may be bound to several keys; the action counts as
// pressed if any of its keys is held and as triggered if any of them was
// pressed this frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== PlayerAction ========================================================

/// Gameplay commands a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Fire,
    Interact,
}

//=== KeyBindings =========================================================

/// Key → action lookup used to build [`PlayerInput`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, PlayerAction>,
}

impl KeyBindings {
    /// Creates an empty binding table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds a key to an action, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: PlayerAction) {
        self.bindings.insert(key, action);
    }

    fn keys_for(&self, action: PlayerAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }
}

impl Default for KeyBindings {
    /// Arrow keys move, Up interacts, Ctrl jumps, Alt fires.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::ArrowLeft, PlayerAction::Left);
        bindings.bind(KeyCode::ArrowRight, PlayerAction::Right);
        bindings.bind(KeyCode::ArrowUp, PlayerAction::Interact);
        bindings.bind(KeyCode::ArrowDown, PlayerAction::Down);
        bindings.bind(KeyCode::ControlLeft, PlayerAction::Jump);
        bindings.bind(KeyCode::Space, PlayerAction::Jump);
        bindings.bind(KeyCode::AltLeft, PlayerAction::Fire);
        bindings.bind(KeyCode::KeyF, PlayerAction::Fire);
        bindings
    }
}

//=== Button ==============================================================

/// State of one gameplay button for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Button {
    /// Held down right now.
    pub is_pressed: bool,

    /// Went down since the previous frame.
    pub was_triggered: bool,
}

impl Button {
    /// A button that was pressed this very frame.
    pub const TRIGGERED: Self = Self {
        is_pressed: true,
        was_triggered: true,
    };

    /// A button held since an earlier frame.
    pub const HELD: Self = Self {
        is_pressed: true,
        was_triggered: false,
    };
}

//=== PlayerInput =========================================================

/// Snapshot of gameplay input for one simulation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: Button,
    pub fire: Button,
    pub interact: Button,
}

impl PlayerInput {
    /// Builds the snapshot from tracked key state.
    pub fn from_state(tracker: &StateTracker, bindings: &KeyBindings) -> Self {
        let button = |action: PlayerAction| Button {
            is_pressed: bindings.keys_for(action).any(|k| tracker.is_key_down(k)),
            was_triggered: bindings.keys_for(action).any(|k| tracker.is_key_pressed(k)),
        };

        Self {
            left: button(PlayerAction::Left).is_pressed,
            right: button(PlayerAction::Right).is_pressed,
            up: button(PlayerAction::Up).is_pressed,
            down: button(PlayerAction::Down).is_pressed,
            jump: button(PlayerAction::Jump),
            fire: button(PlayerAction::Fire),
            interact: button(PlayerAction::Interact),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    #[test]
    fn interact_is_triggered_on_press_frame_only() {
        let bindings = KeyBindings::default();
        let mut tracker = StateTracker::new();

        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowUp));
        let input = PlayerInput::from_state(&tracker, &bindings);
        assert_eq!(input.interact, Button::TRIGGERED);

        tracker.end_frame();
        let input = PlayerInput::from_state(&tracker, &bindings);
        assert_eq!(input.interact, Button::HELD);
    }

    #[test]
    fn any_bound_key_activates_action() {
        let bindings = KeyBindings::default();
        let mut tracker = StateTracker::new();

        tracker.process_event(&InputEvent::KeyDown(KeyCode::KeyF));
        let input = PlayerInput::from_state(&tracker, &bindings);
        assert!(input.fire.was_triggered);
        assert!(!input.jump.is_pressed);
    }

    #[test]
    fn rebinding_a_key_replaces_previous_action() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::ArrowUp, PlayerAction::Up);

        let mut tracker = StateTracker::new();
        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowUp));
        let input = PlayerInput::from_state(&tracker, &bindings);
        assert!(input.up);
        assert!(!input.interact.is_pressed);
    }

    #[test]
    fn unbound_keys_produce_no_input() {
        let bindings = KeyBindings::empty();
        let mut tracker = StateTracker::new();
        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowLeft));

        assert_eq!(PlayerInput::from_state(&tracker, &bindings), PlayerInput::default());
    }
}
