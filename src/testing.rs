//=========================================================================
// Test Doubles
//=========================================================================
//
// Shared fakes for the unit tests of the runtime core.
//
//   RecordingAudio       AudioBackend that remembers every call
//   RecordingRenderer    Renderer that remembers every call
//   ManualClock          Clock whose time only moves when told to
//   MockServiceProvider  ServiceProvider for game logic tests
//   MockEntityFactory    EntityFactory that records projectile requests
//
// The recording doubles are cheap handles onto shared state, so a test
// keeps one clone while the code under test owns another.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

//=== Internal Dependencies ===============================================

use crate::core::math::Vector;
use crate::core::mode::{ModeRequest, ModeRequestSlot};
use crate::core::services::{ActorDescription, AudioBackend, Clock, Renderer, ServiceProvider};
use crate::data::{ActorId, Difficulty, SoundId};
use crate::game_logic::components::{spawn_ordered, Sprite, WorldPosition};
use crate::game_logic::entity_factory::{EntityFactory, ProjectileDirection, ProjectileType};

//=== Audio ===============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    Sound(SoundId),
    Music(String),
    StopMusic,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }
}

impl AudioBackend for RecordingAudio {
    fn play_sound(&mut self, id: SoundId) {
        self.calls.borrow_mut().push(AudioCall::Sound(id));
    }

    fn play_music(&mut self, name: &str) {
        self.calls.borrow_mut().push(AudioCall::Music(name.to_owned()));
    }

    fn stop_music(&mut self) {
        self.calls.borrow_mut().push(AudioCall::StopMusic);
    }
}

//=== Rendering ===========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    BeginFrame,
    Sprite {
        actor: ActorId,
        frame: usize,
        position: Vector,
    },
    Text(String),
    Present(u8),
    /// Inserted by tests to order renderer calls against other events.
    Marker(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Rc<RefCell<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn mark(&self, label: impl Into<String>) {
        self.calls.borrow_mut().push(RenderCall::Marker(label.into()));
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.calls.borrow_mut().push(RenderCall::BeginFrame);
    }

    fn draw_sprite(&mut self, actor: ActorId, frame: usize, position: Vector) {
        self.calls.borrow_mut().push(RenderCall::Sprite {
            actor,
            frame,
            position,
        });
    }

    fn draw_text(&mut self, _position: Vector, text: &str) {
        self.calls.borrow_mut().push(RenderCall::Text(text.to_owned()));
    }

    fn present(&mut self, overlay_alpha: u8) {
        self.calls.borrow_mut().push(RenderCall::Present(overlay_alpha));
    }
}

//=== Clock ===============================================================

/// Clock frozen at its creation instant until advanced. Sleeping
/// advances it by the requested amount and returns immediately.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Time passed since creation.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

//=== MockServiceProvider =================================================

#[derive(Debug, Default)]
pub struct MockServiceProvider {
    pub sounds: Vec<SoundId>,
    pub music: Option<String>,
    pub requests: ModeRequestSlot,
    pub debug_text: Vec<String>,
    pub shareware: bool,
}

impl MockServiceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sound(&self) -> Option<SoundId> {
        self.sounds.last().copied()
    }

    pub fn pending_request(&self) -> Option<ModeRequest> {
        self.requests.pending().copied()
    }
}

impl ServiceProvider for MockServiceProvider {
    fn play_sound(&mut self, id: SoundId) {
        self.sounds.push(id);
    }

    fn play_music(&mut self, name: &str) {
        self.music = Some(name.to_owned());
    }

    fn stop_music(&mut self) {
        self.music = None;
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
        self.shareware
    }

    fn show_debug_text(&mut self, text: &str) {
        self.debug_text.push(text.to_owned());
    }
}

//=== MockEntityFactory ===================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireShotParameters {
    pub kind: ProjectileType,
    pub position: Vector,
    pub direction: ProjectileDirection,
}

/// Creates bare sprite entities and records projectile requests.
#[derive(Debug, Default)]
pub struct MockEntityFactory {
    pub projectile_calls: Vec<FireShotParameters>,
}

impl MockEntityFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn mock_sprite(world: &mut World, actor: ActorId, position: Vector) -> Entity {
        spawn_ordered(world, (Sprite::new(actor), WorldPosition(position)))
    }
}

impl EntityFactory for MockEntityFactory {
    fn create_projectile(
        &mut self,
        world: &mut World,
        kind: ProjectileType,
        position: Vector,
        direction: ProjectileDirection,
    ) -> Entity {
        self.projectile_calls.push(FireShotParameters {
            kind,
            position,
            direction,
        });
        Self::mock_sprite(world, kind.actor_id(), position)
    }

    fn create_entities_for_level(
        &mut self,
        _world: &mut World,
        _actors: &[ActorDescription],
    ) -> Option<Entity> {
        None
    }

    fn create_sprite(
        &mut self,
        world: &mut World,
        actor: ActorId,
        position: Vector,
        _assign_bounding_box: bool,
    ) -> Entity {
        Self::mock_sprite(world, actor, position)
    }

    fn create_actor(&mut self, world: &mut World, actor: ActorId, position: Vector) -> Entity {
        Self::mock_sprite(world, actor, position)
    }
}
