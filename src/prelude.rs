//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sidescroll_runtime::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration and errors
pub use crate::core::config::{GameOptions, LoopConfig};
pub use crate::core::error::{GameError, InteractionError, ResourceError};

// Modes
pub use crate::core::mode::{GameMode, ModeContext, ModeController, ModeFactory, ModeRequest};

// Input
pub use crate::core::input::{InputEvent, KeyCode, PlayerInput};

// Services
pub use crate::core::services::ServiceProvider;

// Game logic
pub use crate::game_logic::{EntityFactory, PlayerInteractionSystem};
