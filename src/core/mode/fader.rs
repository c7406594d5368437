//=========================================================================
// Screen Fader
//=========================================================================
//
// Blocking fade to and from black.
//
// A fade re-presents the last drawn frame `steps` times with a changing
// overlay, sleeping between steps. The caller is parked until the fade
// completes.
//
//   fade_out:  overlay 0 ──→ 255   (screen ends black)
//   fade_in:   overlay 255 ──→ 0
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::services::{Clock, Renderer};

//=== Constants ===========================================================

pub const OPAQUE: u8 = u8::MAX;
pub const TRANSPARENT: u8 = 0;

//=== ScreenFader =========================================================

#[derive(Debug, Clone)]
pub struct ScreenFader {
    duration: Duration,
    steps: u32,
    overlay: u8,
}

impl Default for ScreenFader {
    /// A quarter second fade in 8 steps, starting on a black screen.
    fn default() -> Self {
        Self::new(Duration::from_millis(250), 8)
    }
}

impl ScreenFader {
    /// Creates a fader whose screen starts black.
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0`.
    pub fn new(duration: Duration, steps: u32) -> Self {
        assert!(steps > 0, "Fade needs at least one step");
        Self {
            duration,
            steps,
            overlay: OPAQUE,
        }
    }

    /// Overlay the next regular frame must be presented with.
    pub fn overlay_alpha(&self) -> u8 {
        self.overlay
    }

    /// Fades the last drawn frame to black. No-op if already black.
    pub fn fade_out(&mut self, renderer: &mut dyn Renderer, clock: &dyn Clock) {
        self.fade_to(OPAQUE, renderer, clock);
    }

    /// Fades from black to the last drawn frame. No-op if nothing covers
    /// the screen.
    pub fn fade_in(&mut self, renderer: &mut dyn Renderer, clock: &dyn Clock) {
        self.fade_to(TRANSPARENT, renderer, clock);
    }

    fn fade_to(&mut self, target: u8, renderer: &mut dyn Renderer, clock: &dyn Clock) {
        if self.overlay == target {
            return;
        }

        let start = i32::from(self.overlay);
        let distance = i32::from(target) - start;
        let step_duration = self.duration / self.steps;
        let steps = self.steps as i32;

        trace!(target: "mode", "Fading overlay {} → {}", start, target);

        for step in 1..=steps {
            let alpha = start + distance * step / steps;
            self.overlay = alpha.clamp(0, 255) as u8;
            renderer.present(self.overlay);
            clock.sleep(step_duration);
        }

        self.overlay = target;
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualClock, RecordingRenderer, RenderCall};

    fn presented_alphas(renderer: &RecordingRenderer) -> Vec<u8> {
        renderer
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                RenderCall::Present(alpha) => Some(alpha),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn fader_starts_black() {
        assert_eq!(ScreenFader::default().overlay_alpha(), OPAQUE);
    }

    #[test]
    fn fade_in_steps_down_to_transparent() {
        let mut fader = ScreenFader::new(Duration::from_millis(40), 4);
        let mut renderer = RecordingRenderer::new();
        let clock = ManualClock::new();

        fader.fade_in(&mut renderer, &clock);

        assert_eq!(presented_alphas(&renderer), vec![192, 128, 64, 0]);
        assert_eq!(fader.overlay_alpha(), TRANSPARENT);
        assert_eq!(clock.elapsed(), Duration::from_millis(40));
    }

    #[test]
    fn fade_out_ends_fully_black() {
        let mut fader = ScreenFader::new(Duration::from_millis(30), 3);
        let mut renderer = RecordingRenderer::new();
        let clock = ManualClock::new();

        fader.fade_in(&mut renderer, &clock);
        renderer.clear();
        fader.fade_out(&mut renderer, &clock);

        assert_eq!(presented_alphas(&renderer), vec![85, 170, 255]);
        assert_eq!(fader.overlay_alpha(), OPAQUE);
    }

    #[test]
    fn repeated_fade_is_a_noop() {
        let mut fader = ScreenFader::default();
        let mut renderer = RecordingRenderer::new();
        let clock = ManualClock::new();

        fader.fade_out(&mut renderer, &clock);
        assert!(renderer.calls().is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn zero_steps_panics() {
        ScreenFader::new(Duration::from_millis(10), 0);
    }
}
