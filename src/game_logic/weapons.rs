//=========================================================================
// Weapons
//=========================================================================
//
// Firing the player's weapon and moving shots through the level.
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;
use log::trace;

//=== Internal Dependencies ===============================================

use super::components::WorldPosition;
use super::entity_factory::{EntityFactory, Projectile, ProjectileType};
use super::player::Player;
use crate::core::input::PlayerInput;
use crate::core::services::ServiceProvider;
use crate::data::{InventoryItemType, PlayerModel, SoundId};

//=== Firing ==============================================================

fn shot_sound(kind: ProjectileType) -> SoundId {
    match kind {
        ProjectileType::Normal => SoundId::NormalShot,
        ProjectileType::Laser => SoundId::LaserShot,
        ProjectileType::Rocket => SoundId::RocketShot,
        ProjectileType::Flame => SoundId::FlameThrowerShot,
    }
}

/// Ticks between automatic shots while fire is held with rapid fire.
const RAPID_FIRE_INTERVAL: u32 = 2;

/// Fires the current weapon if the input asks for it.
///
/// A fresh press always fires. Holding the button keeps firing only with
/// the rapid fire item or the flame thrower.
#[derive(Debug, Default)]
pub struct WeaponSystem {
    ticks_held: u32,
}

impl WeaponSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        input: &PlayerInput,
        player: &Player,
        player_model: &mut PlayerModel,
        services: &mut dyn ServiceProvider,
        entity_factory: &mut dyn EntityFactory,
        world: &mut World,
    ) -> Option<Entity> {
        if player.is_dead() || player.is_interacting() || !input.fire.is_pressed {
            self.ticks_held = 0;
            return None;
        }

        let kind = ProjectileType::for_weapon(player_model.weapon());
        let auto_fire = player_model.has_item(InventoryItemType::RapidFire)
            || kind == ProjectileType::Flame;

        let fires = input.fire.was_triggered
            || (auto_fire && self.ticks_held > 0 && self.ticks_held % RAPID_FIRE_INTERVAL == 0);
        self.ticks_held += 1;

        if !fires {
            return None;
        }

        let position = player.muzzle_position();
        let direction = player.orientation().shot_direction();
        trace!(target: "game", "Firing {:?} {:?} from {}", kind, direction, position);

        let shot = entity_factory.create_projectile(world, kind, position, direction);
        player_model.use_ammo();
        services.play_sound(shot_sound(kind));
        Some(shot)
    }
}

//=== Flight ==============================================================

/// Moves every projectile along its direction. Expiry is handled by the
/// projectiles' lifetime.
pub fn update_projectiles(world: &mut World) {
    let mut query = world.query::<(&Projectile, &mut WorldPosition)>();
    for (projectile, mut position) in query.iter_mut(world) {
        position.0 += projectile.direction.unit() * projectile.kind.speed();
    }
}

//=========================================================================
// Tests
//=========================================================================
