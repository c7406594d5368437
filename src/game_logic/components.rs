//=========================================================================
// Components
//=========================================================================
//
// ECS components making up level entities.
//
//   Spatial       WorldPosition, BoundingBox
//   Interaction   Interactable, CollectableItem, ForceField, PlayerSpawn
//   Visual        Sprite
//   Lifecycle     Lifetime, SpawnOrder (+ SpawnCounter resource)
//
// Entities are created through `spawn_ordered`, which stamps every new
// entity with its creation index. Systems that scan the registry sort by
// that index, so resolution order never depends on storage layout.
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;

//=== Internal Dependencies ===============================================

use crate::core::math::{Extents, Rect, Vector};
use crate::data::{
    ActorId, CollectableLetterType, InventoryItemType, TutorialMessageId, WeaponType,
};

//=== Spatial =============================================================

/// Position in tile space. Refers to the bottom-left tile of the actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldPosition(pub Vector);

/// Collision box relative to the actor's position.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox(pub Rect);

impl BoundingBox {
    /// Box of the given size whose bottom-left tile is the actor's
    /// position.
    pub fn of_size(width: i32, height: i32) -> Self {
        Self(Rect::new(Vector::ZERO, Extents::new(width, height)))
    }

    pub fn to_world_space(&self, position: &WorldPosition) -> Rect {
        self.0.to_world_space(position.0)
    }
}

//=== Interaction =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractableType {
    Teleporter,
    ForceFieldCardReader,
}

impl InteractableType {
    /// Hint shown while the player stands in front of the object.
    pub fn tutorial_message(self) -> TutorialMessageId {
        match self {
            Self::Teleporter => TutorialMessageId::FoundTeleporter,
            Self::ForceFieldCardReader => TutorialMessageId::FoundForceField,
        }
    }
}

/// Something the player can use with the interact button.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactable {
    pub kind: InteractableType,
}

impl Interactable {
    pub fn new(kind: InteractableType) -> Self {
        Self { kind }
    }
}

/// Pickup effects. Every field is applied independently when the player
/// touches the item.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectableItem {
    pub given_score: Option<u32>,

    /// Replaces `given_score` while the player is at full health.
    pub given_score_at_full_health: Option<u32>,
    pub given_health: Option<i32>,
    pub given_weapon: Option<WeaponType>,
    pub given_item: Option<InventoryItemType>,
    pub given_letter: Option<CollectableLetterType>,
    pub shown_tutorial_message: Option<TutorialMessageId>,

    /// Spawn floating numbers for the given score.
    pub spawn_score_numbers: bool,
}

impl CollectableItem {
    /// Score handed out on pickup, if any.
    pub fn given_score(&self, player_at_full_health: bool) -> Option<u32> {
        if player_at_full_health {
            if let Some(score) = self.given_score_at_full_health {
                return Some(score);
            }
        }
        self.given_score
    }
}

/// Barrier removed by a card reader.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForceField;

/// Touching it finishes the level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelExit;

/// Where the player enters the level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerSpawn;

//=== Visual ==============================================================

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub actor: ActorId,
    pub frame: usize,
    pub visible: bool,
}

impl Sprite {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            frame: 0,
            visible: true,
        }
    }
}

//=== Lifecycle ===========================================================

/// Entity is removed once this reaches zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    pub remaining_ticks: u32,
}

impl Lifetime {
    pub fn ticks(remaining_ticks: u32) -> Self {
        Self { remaining_ticks }
    }
}

/// Creation index of an entity within its world.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// Hands out `SpawnOrder` values.
#[derive(Resource, Debug, Default)]
pub struct SpawnCounter {
    next: u64,
}

impl SpawnCounter {
    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// Spawns `bundle` stamped with the world's next [`SpawnOrder`].
pub fn spawn_ordered<B: Bundle>(world: &mut World, bundle: B) -> Entity {
    let order = world
        .get_resource_or_insert_with(SpawnCounter::default)
        .next_order();
    world.spawn((bundle, order)).id()
}

/// Sort key for deterministic scans. Entities without a spawn order go
/// last, ties fall back to the entity id.
pub fn spawn_order_key(entity: Entity, order: Option<&SpawnOrder>) -> (u64, Entity) {
    (order.map_or(u64::MAX, |o| o.0), entity)
}

/// Counts down every [`Lifetime`] and despawns the expired entities.
pub fn age_entities(world: &mut World) -> usize {
    let mut expired = Vec::new();
    let mut query = world.query::<(Entity, &mut Lifetime)>();
    for (entity, mut lifetime) in query.iter_mut(world) {
        lifetime.remaining_ticks = lifetime.remaining_ticks.saturating_sub(1);
        if lifetime.remaining_ticks == 0 {
            expired.push(entity);
        }
    }

    for entity in &expired {
        world.despawn(*entity);
    }
    expired.len()
}

//=========================================================================
// Tests
//=========================================================================
