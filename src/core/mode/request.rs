//=========================================================================
// Mode Requests
//=========================================================================
//
// Deferred requests to switch the active game mode.
//
// Modes and their subsystems store requests here during a frame. The mode
// controller takes them at the frame boundary and performs the faded
// transition.
//
//   schedule_*() ──→ ModeRequestSlot ──take()──→ ModeController
//
// Only the most recent mode request is kept. Quit is tracked separately
// and cannot be withdrawn once set.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::data::Difficulty;

//=== ModeRequest =========================================================

/// Everything needed to construct the next mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequest {
    Intro,
    MainMenu,
    NewGame { episode: u8, difficulty: Difficulty },
    JumpToLevel { episode: u8, level: u8, difficulty: Difficulty },
}

//=== ModeRequestSlot =====================================================

/// Holds at most one pending mode request plus the quit flag.
#[derive(Debug, Default)]
pub struct ModeRequestSlot {
    pending: Option<ModeRequest>,
    quit: bool,
}

impl ModeRequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a request, replacing any request not yet processed.
    pub fn request(&mut self, request: ModeRequest) {
        if self.quit {
            warn!(target: "mode", "Ignoring {:?}: quit already requested", request);
            return;
        }

        if let Some(previous) = self.pending.replace(request) {
            debug!(target: "mode", "Request {:?} superseded by {:?}", previous, request);
        } else {
            debug!(target: "mode", "Mode switch requested: {:?}", request);
        }
    }

    /// Marks the game for termination and drops any pending switch.
    pub fn request_quit(&mut self) {
        if !self.quit {
            debug!(target: "mode", "Quit requested");
        }
        self.quit = true;
        self.pending = None;
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit
    }

    pub fn pending(&self) -> Option<&ModeRequest> {
        self.pending.as_ref()
    }

    /// Takes the pending request, leaving the slot empty.
    pub fn take(&mut self) -> Option<ModeRequest> {
        self.pending.take()
    }
}

//=========================================================================
// Tests
//=========================================================================
