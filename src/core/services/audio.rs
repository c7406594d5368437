//=========================================================================
// Audio Backend
//=========================================================================
//
// Narrow contract to the sound system. Mixing, decoding and device
// handling live behind it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::data::SoundId;

//=== AudioBackend ========================================================

pub trait AudioBackend {
    fn play_sound(&mut self, id: SoundId);

    /// Starts looping the named song, replacing the current one.
    fn play_music(&mut self, name: &str);

    fn stop_music(&mut self);
}

//=== HeadlessAudio =======================================================

/// Audio backend without a device. Logs what would be played.
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    current_song: Option<String>,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_song(&self) -> Option<&str> {
        self.current_song.as_deref()
    }
}

impl AudioBackend for HeadlessAudio {
    fn play_sound(&mut self, id: SoundId) {
        trace!(target: "audio", "Sound {:?}", id);
    }

    fn play_music(&mut self, name: &str) {
        debug!(target: "audio", "Music '{}' started", name);
        self.current_song = Some(name.to_owned());
    }

    fn stop_music(&mut self) {
        if let Some(song) = self.current_song.take() {
            debug!(target: "audio", "Music '{}' stopped", song);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_audio_tracks_current_song() {
        let mut audio = HeadlessAudio::new();
        audio.play_music("MENU_THEME");
        assert_eq!(audio.current_song(), Some("MENU_THEME"));

        audio.play_music("LEVEL_THEME");
        assert_eq!(audio.current_song(), Some("LEVEL_THEME"));

        audio.stop_music();
        assert_eq!(audio.current_song(), None);
    }
}
