//=========================================================================
// Gameplay Events
//=========================================================================
//
// Events emitted by the interaction resolver and consumed by the play
// mode within the same frame.
//
//=========================================================================

//=== Module Declarations =================================================

mod bus;
mod queue;

//=== Public API ==========================================================

pub use bus::{EventBus, GameEvent};

//=== Internal Dependencies ===============================================

use crate::core::math::Vector;
use crate::data::TutorialMessageId;

//=== Event Types =========================================================

/// Text shown in the HUD message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMessage {
    pub text: String,
}

impl PlayerMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Contextual hint. Listeners decide whether it was already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialMessage {
    pub id: TutorialMessageId,
}

impl TutorialMessage {
    pub fn new(id: TutorialMessageId) -> Self {
        Self { id }
    }
}

/// The player used a teleporter and must be moved to `target_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTeleported {
    pub target_position: Vector,
}
