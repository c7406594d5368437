//=========================================================================
// Main Menu Mode
//=========================================================================
//
// Runs the main menu script and acts on the player's choice.
//
//   "EPISODE n"  → new game in episode n
//   "QUIT"       → quit
//   Escape       → quit
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::math::Vector;
use crate::core::mode::{GameMode, ModeContext};
use crate::core::services::resources::script_names;
use crate::core::services::ScriptResult;
use crate::data::{Difficulty, SoundId};

//=== Constants ===========================================================

pub const MENU_MUSIC: &str = "MENU_THEME";

const SHAREWARE_NOTICE: &str = "ONLY EPISODE 1 IS AVAILABLE";
const NOTICE_DURATION: Duration = Duration::from_secs(3);
const NOTICE_POSITION: Vector = Vector::new(6, 18);

//=== MenuMode ============================================================

pub struct MenuMode {
    episode_count: usize,
    choice_made: bool,
    /// Time the shareware notice stays on screen.
    notice_left: Option<Duration>,
}

impl MenuMode {
    pub fn new(ctx: &mut ModeContext<'_>) -> Self {
        ctx.services.play_music(MENU_MUSIC);

        // Every option but the last starts an episode
        let episode_count = ctx
            .scripts
            .get(script_names::MAIN_MENU)
            .map_or(0, |script| script.options.len().saturating_sub(1));

        let mut menu = Self {
            episode_count,
            choice_made: false,
            notice_left: None,
        };
        if !ctx.run_script(script_names::MAIN_MENU) {
            menu.choose(ScriptResult::Cancelled, ctx);
        }
        menu
    }

    fn choose(&mut self, result: ScriptResult, ctx: &mut ModeContext<'_>) {
        if self.choice_made {
            return;
        }
        self.choice_made = true;

        match result {
            ScriptResult::Selected(index) if index < self.episode_count => {
                let episode = index as u8 + 1;
                if ctx.services.is_shareware_version() && episode > 1 {
                    warn!(target: "mode", "Episode {} is not part of the shareware version", episode);
                    self.notice_left = Some(NOTICE_DURATION);
                    self.choice_made = false;
                    ctx.run_script(script_names::MAIN_MENU);
                    return;
                }

                debug!(target: "mode", "Menu: new game, episode {}", episode);
                ctx.services.play_sound(SoundId::MenuSelect);
                ctx.services
                    .schedule_new_game_start(episode, Difficulty::default());
            }
            ScriptResult::Selected(_) | ScriptResult::Cancelled | ScriptResult::Completed => {
                debug!(target: "mode", "Menu: quit ({:?})", result);
                ctx.services.schedule_game_quit();
            }
        }
    }
}

impl GameMode for MenuMode {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        ctx.script_runner.handle_event(event);
        if let Some(result) = ctx.script_runner.result() {
            self.choose(result, ctx);
        }
    }

    fn update_and_render(
        &mut self,
        dt: Duration,
        ctx: &mut ModeContext<'_>,
    ) -> Result<(), GameError> {
        ctx.script_runner
            .update_and_render(dt, &mut *ctx.renderer, ctx.text_renderer);

        self.notice_left = self
            .notice_left
            .map(|left| left.saturating_sub(dt))
            .filter(|left| !left.is_zero());
        if self.notice_left.is_some() {
            ctx.text_renderer
                .draw_text(&mut *ctx.renderer, NOTICE_POSITION, SHAREWARE_NOTICE);
        }
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================
