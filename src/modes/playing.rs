//=========================================================================
// Playing Mode
//=========================================================================
//
// A game session. Plays the levels of an episode one after another and
// owns everything that lives as long as the session.
//
// Architecture:
//   PlayingMode
//     ├─ PlayerModel      score, health, inventory (carried across levels)
//     ├─ World            level entities (bevy_ecs)
//     ├─ Player           in-level player state
//     ├─ EventBus         per-tick outbox of the resolver
//     └─ Hud
//
// Frame:
//   handle_event → StateTracker
//   update_and_render(dt) → fixed 15 Hz ticks → draw world + HUD
//
// Tick:
//   player → weapons → interaction → collection → level exit
//     → projectiles → score numbers → lifetimes → deliver events
//
// Level exit:
//   fade out → reset_for_new_level → load level + 1 → fade in
//   (no further level in the episode → back to the menu)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use bevy_ecs::prelude::*;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::hud::Hud;
use crate::core::error::{GameError, ResourceError};
use crate::core::events::{EventBus, PlayerMessage, PlayerTeleported, TutorialMessage};
use crate::core::input::{InputEvent, KeyBindings, KeyCode, PlayerInput, StateTracker};
use crate::core::math::Vector;
use crate::core::mode::{GameMode, ModeContext};
use crate::core::services::{LevelData, Renderer};
use crate::data::{Difficulty, PlayerModel};
use crate::game_logic::components::{
    age_entities, spawn_order_key, SpawnOrder, Sprite, WorldPosition,
};
use crate::game_logic::score_numbers::update_score_numbers;
use crate::game_logic::weapons::update_projectiles;
use crate::game_logic::{
    player_reached_exit, EntityFactory, Player, PlayerInteractionSystem, StandardEntityFactory,
    WeaponSystem,
};

//=== Constants ===========================================================

/// Simulation step of the game logic (15 Hz).
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 15);

const VIEWPORT_WIDTH: i32 = 40;
const VIEWPORT_HEIGHT: i32 = 21;

/// Name the session's score is recorded under.
const HIGH_SCORE_NAME: &str = "PLAYER";

//=== PlayingMode =========================================================

pub struct PlayingMode {
    episode: u8,
    level: u8,
    difficulty: Difficulty,
    player_model: PlayerModel,
    world: World,
    player: Player,
    events: EventBus,
    entity_factory: Box<dyn EntityFactory>,
    weapons: WeaponSystem,
    hud: Hud,
    input: StateTracker,
    bindings: KeyBindings,
    accumulated: Duration,
    level_finished: bool,
    show_debug_info: bool,
}

impl PlayingMode {
    /// Loads the level and starts its music.
    ///
    /// # Errors
    ///
    /// Fails if the level cannot be loaded or has no player spawn point.
    pub fn new(
        episode: u8,
        level: u8,
        difficulty: Difficulty,
        ctx: &mut ModeContext<'_>,
    ) -> Result<Self, GameError> {
        Self::with_factory(
            episode,
            level,
            difficulty,
            Box::new(StandardEntityFactory::new()),
            ctx,
        )
    }

    pub fn with_factory(
        episode: u8,
        level: u8,
        difficulty: Difficulty,
        mut entity_factory: Box<dyn EntityFactory>,
        ctx: &mut ModeContext<'_>,
    ) -> Result<Self, GameError> {
        let level_data = ctx.resources.load_level(episode, level)?;
        let (world, spawn) =
            build_level(&mut *entity_factory, episode, level, &level_data, ctx)?;

        Ok(Self {
            episode,
            level,
            difficulty,
            player_model: PlayerModel::new(),
            world,
            player: Player::new(spawn),
            events: EventBus::new(),
            entity_factory,
            weapons: WeaponSystem::new(),
            hud: Hud::new(),
            input: StateTracker::new(),
            bindings: KeyBindings::default(),
            accumulated: Duration::ZERO,
            level_finished: false,
            show_debug_info: false,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    //--- Accessors --------------------------------------------------------

    pub fn player_model(&self) -> &PlayerModel {
        &self.player_model
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    //--- Simulation -------------------------------------------------------

    /// Runs one fixed simulation step.
    fn tick(&mut self, ctx: &mut ModeContext<'_>) -> Result<(), GameError> {
        let input = PlayerInput::from_state(&self.input, &self.bindings);

        if self.player_model.is_dead() && !self.player.is_dead() {
            info!(target: "game", "Player died");
            self.player.die();
        }

        self.player.update(&input);
        self.weapons.update(
            &input,
            &self.player,
            &mut self.player_model,
            &mut *ctx.services,
            &mut *self.entity_factory,
            &mut self.world,
        );

        {
            let mut interaction = PlayerInteractionSystem::new(
                &mut self.player,
                &mut self.player_model,
                &mut *ctx.services,
                &mut *self.entity_factory,
                &mut self.events,
            );
            interaction.update_player_interaction(&input, &mut self.world)?;
            interaction.update_item_collection(&mut self.world)?;
        }

        if player_reached_exit(&mut self.world, &self.player) {
            debug!(target: "game", "Level exit reached");
            self.level_finished = true;
        }

        update_projectiles(&mut self.world);
        update_score_numbers(&mut self.world);
        age_entities(&mut self.world);
        self.hud.update();

        self.deliver_events();
        self.input.end_frame();
        Ok(())
    }

    /// Hands this tick's events to their listeners.
    fn deliver_events(&mut self) {
        for teleport in self.events.read::<PlayerTeleported>() {
            debug!(target: "game", "Teleporting player to {}", teleport.target_position);
            self.player.set_position(teleport.target_position);
        }

        for message in self.events.read::<PlayerMessage>() {
            self.hud.show_message(message.text.as_str());
        }

        for tutorial in self.events.read::<TutorialMessage>() {
            let shown = self.player_model.tutorial_messages_mut();
            if !shown.has_been_shown(tutorial.id) {
                shown.mark_as_shown(tutorial.id);
                self.hud.show_message(tutorial.id.text());
            }
        }

        self.events.clear_all();
    }

    /// Moves on to the next level of the episode, keeping the player's
    /// progress. Ends the session when the episode has no further level.
    fn finish_level(&mut self, ctx: &mut ModeContext<'_>) -> Result<(), GameError> {
        self.level_finished = false;
        let episode = self.episode;
        let next_level = self
            .level
            .checked_add(1)
            .map(|next| (next, ctx.resources.load_level(episode, next)));

        let (next, level_data) = match next_level {
            Some((next, Ok(level_data))) => (next, level_data),
            None | Some((_, Err(ResourceError::LevelNotFound { .. }))) => {
                info!(target: "game", "Episode {} finished", episode);
                self.quit_to_menu(ctx);
                return Ok(());
            }
            Some((_, Err(e))) => return Err(e.into()),
        };

        ctx.fade_out_screen();

        let (world, spawn) =
            build_level(&mut *self.entity_factory, episode, next, &level_data, ctx)?;
        self.level = next;
        self.world = world;
        self.player = Player::new(spawn);
        self.player_model.reset_for_new_level();
        self.events.clear_all();
        self.weapons = WeaponSystem::new();
        self.input.reset();
        self.accumulated = Duration::ZERO;

        self.render_world(&mut *ctx.renderer);
        ctx.fade_in_screen();
        Ok(())
    }

    /// Leaves for the main menu and records the score.
    fn quit_to_menu(&mut self, ctx: &mut ModeContext<'_>) {
        let score = self.player_model.score();
        if ctx.user_profile.add_high_score(HIGH_SCORE_NAME, score).is_none() {
            debug!(target: "game", "Score {} did not make the high score list", score);
        }
        ctx.services.schedule_enter_main_menu();
    }

    //--- Rendering --------------------------------------------------------

    fn camera_position(&self) -> Vector {
        let player = self.player.position();
        Vector::new((player.x - VIEWPORT_WIDTH / 2).max(0), 0)
    }

    fn render_world(&mut self, renderer: &mut dyn Renderer) {
        let camera = self.camera_position();
        let on_screen = |position: Vector| {
            let relative = position - camera;
            (-4..VIEWPORT_WIDTH).contains(&relative.x) && (0..VIEWPORT_HEIGHT).contains(&relative.y)
        };

        let mut query = self
            .world
            .query::<(Entity, &Sprite, &WorldPosition, Option<&SpawnOrder>)>();
        let mut sprites: Vec<_> = query
            .iter(&self.world)
            .filter(|(_, sprite, position, _)| sprite.visible && on_screen(position.0))
            .map(|(entity, sprite, position, order)| {
                (spawn_order_key(entity, order), *sprite, position.0)
            })
            .collect();
        sprites.sort_by_key(|(key, _, _)| *key);

        for (_, sprite, position) in sprites {
            renderer.draw_sprite(sprite.actor, sprite.frame, position - camera);
        }

        let (actor, frame) = self.player.sprite();
        renderer.draw_sprite(actor, frame, self.player.position() - camera);
    }
}

/// Populates a fresh world from the level's actor list, starts the level
/// music and returns the world with the player's start position.
fn build_level(
    entity_factory: &mut dyn EntityFactory,
    episode: u8,
    level: u8,
    level_data: &LevelData,
    ctx: &mut ModeContext<'_>,
) -> Result<(World, Vector), GameError> {
    let mut world = World::new();
    let spawn = entity_factory
        .create_entities_for_level(&mut world, &level_data.actors)
        .and_then(|spawn| world.get::<WorldPosition>(spawn).copied())
        .ok_or(ResourceError::MissingPlayerSpawn { episode, level })?;

    ctx.services.play_music(&level_data.music);
    info!(
        target: "game",
        "Level {} started ({} entities)",
        level_data.name,
        world.entities().len()
    );
    Ok((world, spawn.0))
}

impl GameMode for PlayingMode {
    fn name(&self) -> &'static str {
        "playing"
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        match event {
            InputEvent::KeyDown(KeyCode::Escape) => self.quit_to_menu(ctx),
            InputEvent::KeyDown(KeyCode::F12) => self.show_debug_info = !self.show_debug_info,
            _ => self.input.process_event(event),
        }
    }

    fn update_and_render(
        &mut self,
        dt: Duration,
        ctx: &mut ModeContext<'_>,
    ) -> Result<(), GameError> {
        self.accumulated += dt;
        while self.accumulated >= TICK_DURATION && !self.level_finished {
            self.accumulated -= TICK_DURATION;
            self.tick(ctx)?;
        }

        if self.level_finished {
            self.finish_level(ctx)?;
        }

        self.render_world(&mut *ctx.renderer);
        self.hud.render(
            &self.player_model,
            &mut *ctx.renderer,
            ctx.text_renderer,
            ctx.ui_sprite_sheet,
        );

        if self.show_debug_info {
            ctx.services.show_debug_text(&format!(
                "E{}L{} {:?}",
                self.episode, self.level, self.difficulty
            ));
            ctx.services
                .show_debug_text(&format!("ENTITIES: {}", self.world.entities().len()));
        }
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================
