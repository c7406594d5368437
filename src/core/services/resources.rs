//=========================================================================
// Resource Loading
//=========================================================================
//
// Access to level data and UI scripts. File formats are the loader's
// business; the core only sees actor lists and scripts.
//
// `BuiltinResources` ships a small demo level and the UI scripts so the
// runtime can start without game data files.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::script::{Script, ScriptBundle};
use crate::core::error::ResourceError;
use crate::core::math::Vector;
use crate::data::ActorId;

//=== Level Data ==========================================================

/// One actor placed in a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorDescription {
    pub id: ActorId,
    pub position: Vector,
}

impl ActorDescription {
    pub fn new(id: ActorId, x: i32, y: i32) -> Self {
        Self {
            id,
            position: Vector::new(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    pub name: String,
    pub music: String,
    pub actors: Vec<ActorDescription>,
}

//=== ResourceLoader ======================================================

pub trait ResourceLoader {
    fn load_level(&self, episode: u8, level: u8) -> Result<LevelData, ResourceError>;

    fn load_scripts(&self) -> ScriptBundle;

    /// `true` when only the first episode is available.
    fn is_shareware_version(&self) -> bool {
        false
    }
}

//=== Script Names ========================================================

pub mod script_names {
    pub const INTRO: &str = "Intro";
    pub const MAIN_MENU: &str = "Main_Menu";
}

pub const EPISODE_COUNT: u8 = 4;
pub const LEVELS_PER_EPISODE: u8 = 8;

//=== BuiltinResources ====================================================

/// Resource loader backed by data compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct BuiltinResources {
    shareware: bool,
}

impl BuiltinResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shareware() -> Self {
        Self { shareware: true }
    }

    fn demo_level_actors() -> Vec<ActorDescription> {
        use ActorId as A;

        vec![
            ActorDescription::new(A::PLAYER_SPAWN, 2, 20),
            // Pickups along the floor
            ActorDescription::new(A::SODA_CAN, 8, 20),
            ActorDescription::new(A::RED_GEM, 11, 20),
            ActorDescription::new(A::HEALTH_MOLECULE, 14, 20),
            ActorDescription::new(A::LASER_WEAPON, 17, 20),
            ActorDescription::new(A::RAPID_FIRE, 20, 20),
            // Story letters, deliberately not in order
            ActorDescription::new(A::LETTER_N, 24, 20),
            ActorDescription::new(A::LETTER_U, 27, 20),
            ActorDescription::new(A::LETTER_E, 30, 20),
            ActorDescription::new(A::LETTER_K, 33, 20),
            ActorDescription::new(A::LETTER_M, 36, 20),
            // Teleporter pair
            ActorDescription::new(A::TELEPORTER, 40, 20),
            ActorDescription::new(A::TELEPORTER, 70, 20),
            // Card reader guarding a force field
            ActorDescription::new(A::CIRCUIT_BOARD, 74, 20),
            ActorDescription::new(A::CARD_READER, 78, 20),
            ActorDescription::new(A::FORCE_FIELD, 82, 16),
            ActorDescription::new(A::FORCE_FIELD, 82, 20),
            ActorDescription::new(A::SPECIAL_HINT_GLOBE, 86, 20),
            ActorDescription::new(A::GREEN_GEM, 90, 20),
            ActorDescription::new(A::LEVEL_EXIT, 96, 20),
        ]
    }
}

impl ResourceLoader for BuiltinResources {
    fn load_level(&self, episode: u8, level: u8) -> Result<LevelData, ResourceError> {
        let max_episode = if self.shareware { 1 } else { EPISODE_COUNT };
        if !(1..=max_episode).contains(&episode) || !(1..=LEVELS_PER_EPISODE).contains(&level) {
            return Err(ResourceError::LevelNotFound { episode, level });
        }

        debug!(target: "resources", "Loading level E{}L{}", episode, level);
        Ok(LevelData {
            name: format!("E{episode}L{level}"),
            music: format!("LEVEL_THEME_{}", (level - 1) % 4 + 1),
            actors: Self::demo_level_actors(),
        })
    }

    fn load_scripts(&self) -> ScriptBundle {
        let mut scripts = ScriptBundle::new();

        scripts.insert(
            script_names::INTRO,
            Script::pages(
                [
                    "IN THE YEAR 2050...",
                    "THE EARTH IS UNDER ATTACK.",
                    "ONLY ONE HERO CAN STOP THEM.",
                ],
                Duration::from_secs(3),
            ),
        );

        let episodes = if self.shareware { 1 } else { EPISODE_COUNT };
        let options = (1..=episodes)
            .map(|e| format!("EPISODE {e}"))
            .chain(std::iter::once("QUIT".to_owned()));
        scripts.insert(
            script_names::MAIN_MENU,
            Script::pages(["MAIN MENU"], Duration::ZERO).with_options(options),
        );

        scripts
    }

    fn is_shareware_version(&self) -> bool {
        self.shareware
    }
}

//=========================================================================
// Tests
//=========================================================================
