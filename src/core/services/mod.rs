//=========================================================================
// Services
//=========================================================================
//
// Collaborator contracts of the runtime core and the service provider
// every mode and game system talks to.
//
// Architecture:
//   GameMode / game logic
//       ↓ &mut dyn ServiceProvider
//   GameServices
//       ├─ AudioBackend      (sounds, music)
//       ├─ ModeRequestSlot   (deferred mode switches, quit)
//       └─ debug text        (drawn by the controller after the frame)
//
// The remaining collaborators (renderer, scripts, resources, clock,
// user profile) are handed to modes through `ModeContext`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod clock;
pub mod profile;
pub mod render;
pub mod resources;
pub mod script;

//=== Public API ==========================================================

pub use audio::{AudioBackend, HeadlessAudio};
pub use clock::{Clock, SystemClock};
pub use profile::{HighScoreEntry, UserProfile};
pub use render::{
    HeadlessRenderer, MenuTextRenderer, Renderer, SpriteSheetRenderer, TextRenderer, UiSpriteSheet,
};
pub use resources::{ActorDescription, BuiltinResources, LevelData, ResourceLoader};
pub use script::{PagedScriptRunner, Script, ScriptBundle, ScriptResult, ScriptRunner};

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::mode::{ModeRequest, ModeRequestSlot};
use crate::data::{Difficulty, SoundId};

//=== ServiceProvider =====================================================

/// Services available to modes and game systems.
///
/// All `schedule_*` calls are deferred: they take effect at the end of
/// the current frame, and a later call replaces an earlier one.
pub trait ServiceProvider {
    fn play_sound(&mut self, id: SoundId);

    fn play_music(&mut self, name: &str);

    fn stop_music(&mut self);

    fn schedule_new_game_start(&mut self, episode: u8, difficulty: Difficulty);

    fn schedule_enter_main_menu(&mut self);

    fn schedule_game_quit(&mut self);

    fn is_shareware_version(&self) -> bool;

    /// Text drawn on top of the next presented frame.
    fn show_debug_text(&mut self, text: &str);
}

//=== GameServices ========================================================

/// The service provider owned by the mode controller.
pub struct GameServices {
    audio: Box<dyn AudioBackend>,
    requests: ModeRequestSlot,
    debug_text: String,
    music_enabled: bool,
    is_shareware: bool,
}

impl GameServices {
    pub fn new(audio: Box<dyn AudioBackend>, is_shareware: bool) -> Self {
        Self {
            audio,
            requests: ModeRequestSlot::new(),
            debug_text: String::new(),
            music_enabled: true,
            is_shareware,
        }
    }

    //--- Controller Access ------------------------------------------------

    /// Disabling music also stops the song currently playing.
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        if !enabled {
            self.audio.stop_music();
        }
    }

    pub fn is_music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn requests(&self) -> &ModeRequestSlot {
        &self.requests
    }

    pub fn requests_mut(&mut self) -> &mut ModeRequestSlot {
        &mut self.requests
    }

    /// Returns the debug text collected this frame and clears it.
    pub fn take_debug_text(&mut self) -> String {
        std::mem::take(&mut self.debug_text)
    }
}

impl ServiceProvider for GameServices {
    fn play_sound(&mut self, id: SoundId) {
        self.audio.play_sound(id);
    }

    fn play_music(&mut self, name: &str) {
        if !self.music_enabled {
            trace!(target: "services", "Music disabled, not playing '{}'", name);
            return;
        }
        self.audio.play_music(name);
    }

    fn stop_music(&mut self) {
        self.audio.stop_music();
    }

    fn schedule_new_game_start(&mut self, episode: u8, difficulty: Difficulty) {
        self.requests.request(ModeRequest::NewGame { episode, difficulty });
    }

    fn schedule_enter_main_menu(&mut self) {
        self.requests.request(ModeRequest::MainMenu);
    }

    fn schedule_game_quit(&mut self) {
        self.requests.request_quit();
    }

    fn is_shareware_version(&self) -> bool {
        self.is_shareware
    }

    fn show_debug_text(&mut self, text: &str) {
        debug!(target: "services", "Debug text: {}", text);
        if !self.debug_text.is_empty() {
            self.debug_text.push('\n');
        }
        self.debug_text.push_str(text);
    }
}

//=========================================================================
// Tests
//=========================================================================
