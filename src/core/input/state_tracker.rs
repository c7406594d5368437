//=========================================================================
// State Tracker
//=========================================================================
//
// Keyboard state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_event() → HashSet (keys held) → query
//
// Frame lifecycle: process_event()* → query → end_frame()
//
// Events are forwarded to a mode before its update runs, so a key that
// is pressed and released between two updates still reports
// `is_key_pressed` for exactly one update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,

    //--- Frame Deltas (reset by end_frame()) -----------------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies a single input event to the tracked state.
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
            }
        }
    }

    /// Clears frame-specific deltas. Call once after each update.
    pub fn end_frame(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
    }

    /// Forgets all held keys, e.g. after the owning mode lost focus.
    pub fn reset(&mut self) {
        self.keys_down.clear();
        self.end_frame();
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN since the last `end_frame()`.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP since the last `end_frame()`.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_pressed_only_until_end_of_frame() {
        let mut tracker = StateTracker::new();

        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowUp));
        assert!(tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        tracker.end_frame();
        assert!(!tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        tracker.process_event(&InputEvent::KeyUp(KeyCode::ArrowUp));
        assert!(tracker.is_key_released(KeyCode::ArrowUp));
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn repeated_key_down_does_not_retrigger() {
        let mut tracker = StateTracker::new();

        tracker.process_event(&InputEvent::KeyDown(KeyCode::Space));
        tracker.end_frame();
        tracker.process_event(&InputEvent::KeyDown(KeyCode::Space));

        assert!(!tracker.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn tap_within_one_frame_still_reports_press() {
        let mut tracker = StateTracker::new();

        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowUp));
        tracker.process_event(&InputEvent::KeyUp(KeyCode::ArrowUp));

        assert!(tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_event(&InputEvent::KeyUp(KeyCode::KeyA));
        assert!(!tracker.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn reset_forgets_held_keys() {
        let mut tracker = StateTracker::new();
        tracker.process_event(&InputEvent::KeyDown(KeyCode::ArrowLeft));
        tracker.reset();

        assert!(!tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(!tracker.is_key_pressed(KeyCode::ArrowLeft));
    }
}
