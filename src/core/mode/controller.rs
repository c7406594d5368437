//=========================================================================
// Mode Controller
//=========================================================================
//
// Owns the frame loop and the active game mode.
//
// Frame:
//   collect_frame() → handle_event()* → begin_frame → update_and_render(dt)
//     → debug/FPS overlay → present → [quit?] → [pending request?] → pace
//
// Transition (blocking, between two frames):
//   fade out → drop old mode → create new mode → priming render (hidden)
//     → fade in → discard input received meanwhile → reset frame timer
//
// Quit is terminal: the loop ends after the frame it was requested in.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::{debug, error, info, trace};

//=== Internal Dependencies ===============================================

use super::context::Collaborators;
use super::request::ModeRequest;
use super::{GameMode, ModeFactory};
use crate::core::config::{GameOptions, LoopConfig};
use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::math::Vector;
use crate::core::platform_bridge::{EventCollector, TickControl};
use crate::core::services::ServiceProvider;
use crate::data::Difficulty;

//=== Constants ===========================================================

/// Poll interval while the window is minimized.
const MINIMIZED_POLL_INTERVAL: Duration = Duration::from_millis(50);

const FPS_POSITION: Vector = Vector::new(34, 0);

//=== FpsCounter ==========================================================

/// Exponentially smoothed frame rate.
#[derive(Debug, Default)]
struct FpsCounter {
    smoothed_frame_time: f64,
}

impl FpsCounter {
    const SMOOTHING: f64 = 0.9;

    fn record(&mut self, dt: Duration) {
        if dt.is_zero() {
            return;
        }

        let frame_time = dt.as_secs_f64();
        self.smoothed_frame_time = if self.smoothed_frame_time == 0.0 {
            frame_time
        } else {
            self.smoothed_frame_time * Self::SMOOTHING + frame_time * (1.0 - Self::SMOOTHING)
        };
    }

    fn fps(&self) -> u32 {
        if self.smoothed_frame_time <= 0.0 {
            0
        } else {
            (1.0 / self.smoothed_frame_time).round() as u32
        }
    }
}

//=== ModeController ======================================================

pub struct ModeController {
    collaborators: Collaborators,
    factory: Box<dyn ModeFactory>,
    config: LoopConfig,
    current_mode: Option<Box<dyn GameMode>>,
    last_time: Option<Instant>,
    show_fps: bool,
    fps: FpsCounter,
}

impl ModeController {
    pub fn new(
        collaborators: Collaborators,
        factory: Box<dyn ModeFactory>,
        config: LoopConfig,
    ) -> Self {
        Self {
            collaborators,
            factory,
            config,
            current_mode: None,
            last_time: None,
            show_fps: false,
            fps: FpsCounter::default(),
        }
    }

    //--- Requests ---------------------------------------------------------

    /// Starts a new game at the next frame boundary.
    pub fn request_new_game(&mut self, episode: u8, difficulty: Difficulty) {
        self.collaborators
            .services
            .schedule_new_game_start(episode, difficulty);
    }

    pub fn request_main_menu(&mut self) {
        self.collaborators.services.schedule_enter_main_menu();
    }

    /// Ends the run loop after the current frame.
    pub fn request_quit(&mut self) {
        self.collaborators.services.schedule_game_quit();
    }

    //--- Accessors --------------------------------------------------------

    pub fn current_mode_name(&self) -> Option<&'static str> {
        self.current_mode.as_ref().map(|m| m.name())
    }

    #[cfg(test)]
    pub(crate) fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    //--- Execution --------------------------------------------------------

    /// Runs the game until quit is requested or the window goes away.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a mode or while constructing
    /// one. The active mode is dropped before returning in every case.
    pub fn run(
        &mut self,
        options: &GameOptions,
        events: &mut EventCollector,
    ) -> Result<(), GameError> {
        info!(target: "mode", "Mode controller starting ({:?})", options);

        self.collaborators
            .services
            .set_music_enabled(options.enable_music);
        self.show_fps = options.show_fps;

        let result = self.main_loop(Self::initial_request(options), events);

        if let Some(mode) = self.current_mode.take() {
            debug!(target: "mode", "Leaving mode '{}'", mode.name());
        }
        self.collaborators.services.stop_music();

        match &result {
            Ok(()) => info!(target: "mode", "Mode controller stopped"),
            Err(e) => error!(target: "mode", "Game loop aborted: {}", e),
        }
        result
    }

    /// First mode to enter for the given options.
    pub fn initial_request(options: &GameOptions) -> ModeRequest {
        match options.level_to_jump_to {
            Some((episode, level)) => ModeRequest::JumpToLevel {
                episode,
                level,
                difficulty: Difficulty::default(),
            },
            None if options.skip_intro => ModeRequest::MainMenu,
            None => ModeRequest::Intro,
        }
    }

    fn main_loop(
        &mut self,
        initial: ModeRequest,
        events: &mut EventCollector,
    ) -> Result<(), GameError> {
        self.enter_mode(initial)?;
        if events.discard_pending_input() == TickControl::Exit {
            return Ok(());
        }

        loop {
            if events.collect_frame() == TickControl::Exit {
                info!(target: "mode", "Platform closed, leaving game loop");
                return Ok(());
            }

            if events.is_minimized() {
                self.last_time = None;
                self.collaborators.clock.sleep(MINIMIZED_POLL_INTERVAL);
                continue;
            }

            let frame_start = self.collaborators.clock.now();
            self.dispatch_events(events.take_inputs());
            self.run_frame(frame_start)?;

            if self.collaborators.services.requests().is_quit_requested() {
                info!(target: "mode", "Quit requested, leaving game loop");
                return Ok(());
            }

            if let Some(request) = self.collaborators.services.requests_mut().take() {
                self.enter_mode(request)?;
                if events.discard_pending_input() == TickControl::Exit {
                    return Ok(());
                }
            } else {
                self.pace_frame(frame_start);
            }
        }
    }

    //--- Frame ------------------------------------------------------------

    fn dispatch_events(&mut self, events: Vec<InputEvent>) {
        let Some(mode) = self.current_mode.as_mut() else { return };
        if events.is_empty() {
            return;
        }

        let mut ctx = self.collaborators.mode_context();
        for event in &events {
            trace!(target: "mode", "Event {:?} → '{}'", event, mode.name());
            mode.handle_event(event, &mut ctx);
        }
    }

    fn run_frame(&mut self, frame_start: Instant) -> Result<(), GameError> {
        let dt = match self.last_time {
            Some(last) => self
                .config
                .clamp_delta(frame_start.saturating_duration_since(last)),
            None => Duration::ZERO,
        };
        self.last_time = Some(frame_start);
        self.fps.record(dt);

        let Some(mode) = self.current_mode.as_mut() else {
            return Ok(());
        };

        let mut ctx = self.collaborators.mode_context();
        ctx.renderer.begin_frame();
        mode.update_and_render(dt, &mut ctx)?;

        self.draw_overlays();
        let overlay = self.collaborators.fader.overlay_alpha();
        self.collaborators.renderer.present(overlay);
        Ok(())
    }

    /// Debug text and the frame rate go on top of the mode's frame.
    fn draw_overlays(&mut self) {
        let Collaborators {
            services,
            renderer,
            text_renderer,
            ..
        } = &mut self.collaborators;

        let debug_text = services.take_debug_text();
        for (row, line) in debug_text.lines().enumerate() {
            text_renderer.draw_text(&mut **renderer, Vector::new(0, row as i32), line);
        }

        if self.show_fps {
            let text = format!("{} FPS", self.fps.fps());
            text_renderer.draw_text(&mut **renderer, FPS_POSITION, &text);
        }
    }

    fn pace_frame(&self, frame_start: Instant) {
        let Some(budget) = self.config.frame_budget() else { return };
        let clock = &self.collaborators.clock;
        let elapsed = clock.now().saturating_duration_since(frame_start);
        if elapsed < budget {
            clock.sleep(budget - elapsed);
        }
    }

    //--- Transitions ------------------------------------------------------

    fn enter_mode(&mut self, request: ModeRequest) -> Result<(), GameError> {
        debug!(target: "mode", "Transition to {:?}", request);

        self.collaborators.mode_context().fade_out_screen();

        if let Some(old_mode) = self.current_mode.take() {
            debug!(target: "mode", "Leaving mode '{}'", old_mode.name());
            drop(old_mode);
        }

        let mut ctx = self.collaborators.mode_context();
        let mut mode = self.factory.create_mode(request, &mut ctx)?;
        info!(target: "mode", "Entered mode '{}'", mode.name());

        // Stays hidden behind the opaque overlay until the fade reveals it
        ctx.renderer.begin_frame();
        mode.update_and_render(Duration::ZERO, &mut ctx)?;
        ctx.fade_in_screen();

        self.current_mode = Some(mode);
        self.last_time = None;
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================
