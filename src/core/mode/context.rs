//=========================================================================
// Mode Context
//=========================================================================
//
// Everything a game mode may touch, assembled fresh for every call into
// a mode from the collaborators the controller owns.
//
// Architecture:
//   Collaborators (owned by ModeController)
//         ↓ mode_context()
//   ModeContext<'_> (non-owning borrows)
//         ↓
//   GameMode::{handle_event, update_and_render}, ModeFactory::create_mode
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::fader::ScreenFader;
use crate::core::services::{
    AudioBackend, BuiltinResources, Clock, GameServices, HeadlessAudio, HeadlessRenderer,
    MenuTextRenderer, PagedScriptRunner, Renderer, ResourceLoader, ScriptBundle, ScriptRunner,
    ServiceProvider, SpriteSheetRenderer, SystemClock, TextRenderer, UiSpriteSheet, UserProfile,
};

//=== Collaborators =======================================================

/// Owned collaborators of the mode controller.
pub struct Collaborators {
    pub services: GameServices,
    pub resources: Box<dyn ResourceLoader>,
    pub renderer: Box<dyn Renderer>,
    pub script_runner: Box<dyn ScriptRunner>,
    pub scripts: ScriptBundle,
    pub text_renderer: Box<dyn TextRenderer>,
    pub ui_sprite_sheet: Box<dyn SpriteSheetRenderer>,
    pub user_profile: UserProfile,
    pub clock: Box<dyn Clock>,
    pub fader: ScreenFader,
}

impl Collaborators {
    /// Wires the given backends with the default UI layer. Scripts are
    /// loaded from `resources` right away.
    pub fn new(
        resources: Box<dyn ResourceLoader>,
        audio: Box<dyn AudioBackend>,
        renderer: Box<dyn Renderer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let scripts = resources.load_scripts();
        let services = GameServices::new(audio, resources.is_shareware_version());

        Self {
            services,
            resources,
            renderer,
            script_runner: Box::new(PagedScriptRunner::new()),
            scripts,
            text_renderer: Box::new(MenuTextRenderer),
            ui_sprite_sheet: Box::new(UiSpriteSheet::default()),
            user_profile: UserProfile::new(),
            clock,
            fader: ScreenFader::default(),
        }
    }

    /// Collaborators that need neither a display nor an audio device.
    pub fn headless() -> Self {
        Self::new(
            Box::new(BuiltinResources::new()),
            Box::new(HeadlessAudio::new()),
            Box::new(HeadlessRenderer::new()),
            Box::new(SystemClock),
        )
    }

    pub fn with_fader(mut self, fader: ScreenFader) -> Self {
        self.fader = fader;
        self
    }

    /// Borrows everything as a context for one call into a mode.
    pub fn mode_context(&mut self) -> ModeContext<'_> {
        ModeContext {
            resources: &*self.resources,
            renderer: &mut *self.renderer,
            services: &mut self.services,
            script_runner: &mut *self.script_runner,
            scripts: &self.scripts,
            text_renderer: &*self.text_renderer,
            ui_sprite_sheet: &*self.ui_sprite_sheet,
            user_profile: &mut self.user_profile,
            clock: &*self.clock,
            fader: &mut self.fader,
        }
    }
}

//=== ModeContext =========================================================

/// Non-owning view of the collaborators, valid for one call.
pub struct ModeContext<'a> {
    pub resources: &'a dyn ResourceLoader,
    pub renderer: &'a mut dyn Renderer,
    pub services: &'a mut dyn ServiceProvider,
    pub script_runner: &'a mut dyn ScriptRunner,
    pub scripts: &'a ScriptBundle,
    pub text_renderer: &'a dyn TextRenderer,
    pub ui_sprite_sheet: &'a dyn SpriteSheetRenderer,
    pub user_profile: &'a mut UserProfile,
    clock: &'a dyn Clock,
    fader: &'a mut ScreenFader,
}

impl ModeContext<'_> {
    /// Fades the screen to black. Blocks until done.
    pub fn fade_out_screen(&mut self) {
        self.fader.fade_out(&mut *self.renderer, self.clock);
    }

    /// Fades the screen in from black. Blocks until done.
    pub fn fade_in_screen(&mut self) {
        self.fader.fade_in(&mut *self.renderer, self.clock);
    }

    /// Overlay the current frame has to be presented with.
    pub fn overlay_alpha(&self) -> u8 {
        self.fader.overlay_alpha()
    }

    /// Starts the named script on the script runner. Returns `false` and
    /// logs a warning if the bundle has no such script.
    pub fn run_script(&mut self, name: &str) -> bool {
        match self.scripts.get(name) {
            Some(script) => {
                self.script_runner.execute_script(script);
                true
            }
            None => {
                warn!(target: "mode", "Script '{}' not found", name);
                false
            }
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
