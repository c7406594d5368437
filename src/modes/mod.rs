//=========================================================================
// Game Modes
//=========================================================================
//
// The concrete modes of the game and the factory building them.
//
//   ModeRequest::Intro         → IntroMode
//   ModeRequest::MainMenu      → MenuMode
//   ModeRequest::NewGame       → PlayingMode (first level of the episode)
//   ModeRequest::JumpToLevel   → PlayingMode
//
//=========================================================================

//=== Module Declarations =================================================

pub mod hud;
pub mod intro;
pub mod menu;
pub mod playing;

//=== Public API ==========================================================

pub use intro::IntroMode;
pub use menu::MenuMode;
pub use playing::PlayingMode;

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;
use crate::core::mode::{GameMode, ModeContext, ModeFactory, ModeRequest};

//=== StandardModeFactory =================================================

#[derive(Debug, Default)]
pub struct StandardModeFactory;

impl StandardModeFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ModeFactory for StandardModeFactory {
    fn create_mode(
        &mut self,
        request: ModeRequest,
        ctx: &mut ModeContext<'_>,
    ) -> Result<Box<dyn GameMode>, GameError> {
        debug!(target: "mode", "Creating mode for {:?}", request);

        let mode: Box<dyn GameMode> = match request {
            ModeRequest::Intro => Box::new(IntroMode::new(ctx)),
            ModeRequest::MainMenu => Box::new(MenuMode::new(ctx)),
            ModeRequest::NewGame {
                episode,
                difficulty,
            } => Box::new(PlayingMode::new(episode, 1, difficulty, ctx)?),
            ModeRequest::JumpToLevel {
                episode,
                level,
                difficulty,
            } => Box::new(PlayingMode::new(episode, level, difficulty, ctx)?),
        };
        Ok(mode)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ResourceError;
    use crate::core::mode::Collaborators;
    use crate::data::Difficulty;

    fn create(request: ModeRequest) -> Result<&'static str, GameError> {
        let mut collaborators = Collaborators::headless();
        let mut ctx = collaborators.mode_context();
        StandardModeFactory::new()
            .create_mode(request, &mut ctx)
            .map(|mode| mode.name())
    }

    #[test]
    fn requests_map_to_modes() {
        assert_eq!(create(ModeRequest::Intro).unwrap(), "intro");
        assert_eq!(create(ModeRequest::MainMenu).unwrap(), "menu");
        assert_eq!(
            create(ModeRequest::NewGame {
                episode: 1,
                difficulty: Difficulty::Hard
            })
            .unwrap(),
            "playing"
        );
    }

    #[test]
    fn jumping_to_a_missing_level_fails() {
        let result = create(ModeRequest::JumpToLevel {
            episode: 9,
            level: 1,
            difficulty: Difficulty::Medium,
        });

        assert!(matches!(
            result,
            Err(GameError::Resource(ResourceError::LevelNotFound { episode: 9, level: 1 }))
        ));
    }
}
