//=========================================================================
// Configuration
//=========================================================================
//
// Run-time options of a game session and the pacing parameters of the
// frame loop. Both are assembled by the `EngineBuilder` and handed to the
// game thread when the engine starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== GameOptions =========================================================

/// Options that decide how the game starts and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Skip intro and menu and start `(episode, level)` right away.
    pub level_to_jump_to: Option<(u8, u8)>,

    /// Start in the main menu instead of the intro.
    pub skip_intro: bool,

    pub enable_music: bool,

    /// Draw the frame rate on top of every frame.
    pub show_fps: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            level_to_jump_to: None,
            skip_intro: false,
            enable_music: true,
            show_fps: false,
        }
    }
}

//=== LoopConfig ==========================================================

/// Frame pacing parameters of the mode controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Upper bound for the delta handed to a mode. Longer frames (window
    /// dragged, debugger break) are clamped to this.
    pub max_frame_delta: Duration,

    /// Frames per second the loop sleeps towards. `None` runs unthrottled.
    pub target_fps: Option<f64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: Duration::from_millis(250),
            target_fps: Some(60.0),
        }
    }
}

impl LoopConfig {
    /// Minimum duration of one loop iteration, if throttled.
    pub fn frame_budget(&self) -> Option<Duration> {
        self.target_fps.map(|fps| Duration::from_secs_f64(1.0 / fps))
    }

    /// Clamps a measured frame time to `max_frame_delta`.
    pub fn clamp_delta(&self, elapsed: Duration) -> Duration {
        elapsed.min(self.max_frame_delta)
    }
}

//=========================================================================
// Tests
//=========================================================================
