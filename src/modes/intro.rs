//=========================================================================
// Intro Mode
//=========================================================================
//
// Plays the intro script. Any key, or the end of the script, leads to
// the main menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::mode::{GameMode, ModeContext};
use crate::core::services::resources::script_names;

//=== IntroMode ===========================================================

pub struct IntroMode {
    menu_requested: bool,
}

impl IntroMode {
    pub fn new(ctx: &mut ModeContext<'_>) -> Self {
        let mut intro = Self {
            menu_requested: false,
        };
        if !ctx.run_script(script_names::INTRO) {
            intro.enter_menu(ctx);
        }
        intro
    }

    fn enter_menu(&mut self, ctx: &mut ModeContext<'_>) {
        if !self.menu_requested {
            debug!(target: "mode", "Intro done");
            self.menu_requested = true;
            ctx.services.schedule_enter_main_menu();
        }
    }
}

impl GameMode for IntroMode {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        if matches!(event, InputEvent::KeyDown(_)) {
            self.enter_menu(ctx);
        }
    }

    fn update_and_render(
        &mut self,
        dt: Duration,
        ctx: &mut ModeContext<'_>,
    ) -> Result<(), GameError> {
        ctx.script_runner
            .update_and_render(dt, &mut *ctx.renderer, ctx.text_renderer);

        if ctx.script_runner.has_finished() {
            self.enter_menu(ctx);
        }
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================
