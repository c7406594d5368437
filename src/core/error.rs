//=========================================================================
// Errors
//=========================================================================
//
// Error taxonomy of the runtime:
//
//   InteractionError  broken level invariants found while resolving
//                     interactions (fatal, ends the run loop)
//   ResourceError     collaborator failures while loading level data
//   GameError         everything that can end `Engine::run` early
//
// Expected negative outcomes (e.g. a card reader denying access) are not
// errors. They surface as in-game hints.
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::entity::Entity;
use thiserror::Error;
use winit::error::EventLoopError;

//=== InteractionError ====================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("teleporter {source_entity:?} has no counterpart in the level")]
    MissingTeleporterTarget { source_entity: Entity },

    #[error("teleporter {source_entity:?} has {count} possible targets, expected exactly one")]
    AmbiguousTeleporterTarget { source_entity: Entity, count: usize },
}

//=== ResourceError =======================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("level {level} of episode {episode} does not exist")]
    LevelNotFound { episode: u8, level: u8 },

    #[error("level {level} of episode {episode} has no player spawn point")]
    MissingPlayerSpawn { episode: u8, level: u8 },
}

//=== GameError ===========================================================

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),

    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),

    #[error("game thread panicked")]
    GameThreadPanicked,
}

//=========================================================================
// Tests
//=========================================================================
