//=========================================================================
// Entity Factory
//=========================================================================
//
// Turns actor ids from level data into configured entities.
//
//   create_entities_for_level(actors) ─→ create_actor(id, pos)*
//                                            ├─ sprite + bounding box
//                                            └─ behavior components
//
// Game systems only depend on the `EntityFactory` trait, so tests can
// substitute a factory that records what was requested.
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::components::{
    spawn_ordered, BoundingBox, CollectableItem, ForceField, Interactable, InteractableType,
    LevelExit, Lifetime, PlayerSpawn, Sprite, WorldPosition,
};
use crate::core::math::{Extents, Vector};
use crate::core::services::ActorDescription;
use crate::data::{
    ActorId, CollectableLetterType, InventoryItemType, TutorialMessageId, WeaponType,
};

//=== Projectiles =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileType {
    Normal,
    Laser,
    Rocket,
    Flame,
}

impl ProjectileType {
    pub fn for_weapon(weapon: WeaponType) -> Self {
        match weapon {
            WeaponType::Normal => Self::Normal,
            WeaponType::Laser => Self::Laser,
            WeaponType::Rocket => Self::Rocket,
            WeaponType::FlameThrower => Self::Flame,
        }
    }

    pub fn actor_id(self) -> ActorId {
        match self {
            Self::Normal => ActorId::NORMAL_SHOT,
            Self::Laser => ActorId::LASER_SHOT,
            Self::Rocket => ActorId::ROCKET,
            Self::Flame => ActorId::FLAME,
        }
    }

    /// Tiles travelled per tick.
    pub fn speed(self) -> i32 {
        match self {
            Self::Normal | Self::Laser => 5,
            Self::Rocket => 3,
            Self::Flame => 2,
        }
    }

    /// Ticks until the shot fizzles out.
    pub fn range(self) -> u32 {
        match self {
            Self::Flame => 4,
            _ => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileDirection {
    Left,
    Right,
}

impl ProjectileDirection {
    pub fn unit(self) -> Vector {
        match self {
            Self::Left => Vector::NEG_X,
            Self::Right => Vector::X,
        }
    }
}

/// A flying shot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub kind: ProjectileType,
    pub direction: ProjectileDirection,
}

//=== EntityFactory =======================================================

pub trait EntityFactory {
    fn create_projectile(
        &mut self,
        world: &mut World,
        kind: ProjectileType,
        position: Vector,
        direction: ProjectileDirection,
    ) -> Entity;

    /// Creates every actor of a level. Returns the player spawn point, if
    /// the level has one.
    fn create_entities_for_level(
        &mut self,
        world: &mut World,
        actors: &[ActorDescription],
    ) -> Option<Entity>;

    /// Creates a purely visual entity, optionally with a bounding box
    /// covering the sprite.
    fn create_sprite(
        &mut self,
        world: &mut World,
        actor: ActorId,
        position: Vector,
        assign_bounding_box: bool,
    ) -> Entity;

    /// Creates a fully configured actor.
    fn create_actor(&mut self, world: &mut World, actor: ActorId, position: Vector) -> Entity;
}

//=== StandardEntityFactory ===============================================

/// Factory for the built-in actor set.
#[derive(Debug, Default)]
pub struct StandardEntityFactory;

impl StandardEntityFactory {
    pub fn new() -> Self {
        Self
    }

    /// Size of an actor's sprite in tiles.
    pub fn sprite_extents(actor: ActorId) -> Extents {
        match actor {
            ActorId::PLAYER | ActorId::TELEPORTER | ActorId::LEVEL_EXIT => Extents::new(3, 5),
            ActorId::CARD_READER => Extents::new(2, 2),
            ActorId::FORCE_FIELD => Extents::new(1, 4),
            ActorId::NORMAL_SHOT | ActorId::LASER_SHOT => Extents::new(2, 1),
            ActorId::ROCKET | ActorId::FLAME => Extents::new(3, 1),
            ActorId::SCORE_NUMBER_100
            | ActorId::SCORE_NUMBER_200
            | ActorId::SCORE_NUMBER_500 => Extents::new(2, 1),
            ActorId::SCORE_NUMBER_1000
            | ActorId::SCORE_NUMBER_2000
            | ActorId::SCORE_NUMBER_5000
            | ActorId::SCORE_NUMBER_10000 => Extents::new(3, 1),
            _ => Extents::new(2, 2),
        }
    }

    fn collectable_for(actor: ActorId) -> Option<CollectableItem> {
        use CollectableLetterType as L;

        let scored = |score: u32| CollectableItem {
            given_score: Some(score),
            spawn_score_numbers: true,
            ..Default::default()
        };
        let letter = |letter: L| CollectableItem {
            given_letter: Some(letter),
            ..Default::default()
        };

        let item = match actor {
            ActorId::SODA_CAN => CollectableItem {
                given_health: Some(1),
                ..scored(100)
            },
            ActorId::HEALTH_MOLECULE => CollectableItem {
                given_health: Some(1),
                given_score_at_full_health: Some(10000),
                shown_tutorial_message: Some(TutorialMessageId::FoundHealthMolecule),
                ..scored(500)
            },
            ActorId::RED_GEM => scored(500),
            ActorId::GREEN_GEM => scored(1000),
            ActorId::LASER_WEAPON => CollectableItem {
                given_weapon: Some(WeaponType::Laser),
                ..scored(2000)
            },
            ActorId::ROCKET_WEAPON => CollectableItem {
                given_weapon: Some(WeaponType::Rocket),
                ..scored(2000)
            },
            ActorId::FLAME_THROWER_WEAPON => CollectableItem {
                given_weapon: Some(WeaponType::FlameThrower),
                ..scored(2000)
            },
            ActorId::RAPID_FIRE => CollectableItem {
                given_item: Some(InventoryItemType::RapidFire),
                shown_tutorial_message: Some(TutorialMessageId::FoundRapidFire),
                ..scored(500)
            },
            ActorId::CIRCUIT_BOARD => CollectableItem {
                given_item: Some(InventoryItemType::CircuitBoard),
                shown_tutorial_message: Some(TutorialMessageId::FoundCircuitBoard),
                ..scored(5000)
            },
            ActorId::BLUE_KEY => CollectableItem {
                given_item: Some(InventoryItemType::BlueKey),
                shown_tutorial_message: Some(TutorialMessageId::FoundBlueKey),
                ..scored(5000)
            },
            ActorId::SPECIAL_HINT_GLOBE => CollectableItem {
                given_item: Some(InventoryItemType::SpecialHintGlobe),
                ..scored(10000)
            },
            ActorId::CLOAKING_DEVICE => CollectableItem {
                given_item: Some(InventoryItemType::CloakingDevice),
                shown_tutorial_message: Some(TutorialMessageId::FoundCloakingDevice),
                ..scored(500)
            },
            ActorId::LETTER_N => letter(L::N),
            ActorId::LETTER_U => letter(L::U),
            ActorId::LETTER_K => letter(L::K),
            ActorId::LETTER_E => letter(L::E),
            ActorId::LETTER_M => letter(L::M),
            _ => return None,
        };
        Some(item)
    }
}

impl EntityFactory for StandardEntityFactory {
    fn create_projectile(
        &mut self,
        world: &mut World,
        kind: ProjectileType,
        position: Vector,
        direction: ProjectileDirection,
    ) -> Entity {
        let entity = self.create_sprite(world, kind.actor_id(), position, true);
        world
            .entity_mut(entity)
            .insert((Projectile { kind, direction }, Lifetime::ticks(kind.range())));
        entity
    }

    fn create_entities_for_level(
        &mut self,
        world: &mut World,
        actors: &[ActorDescription],
    ) -> Option<Entity> {
        let mut spawn = None;
        for actor in actors {
            let entity = self.create_actor(world, actor.id, actor.position);
            if actor.id == ActorId::PLAYER_SPAWN {
                if spawn.is_some() {
                    warn!(target: "game", "Extra player spawn at {} ignored", actor.position);
                } else {
                    spawn = Some(entity);
                }
            }
        }

        debug!(target: "game", "Created {} level entities", actors.len());
        spawn
    }

    fn create_sprite(
        &mut self,
        world: &mut World,
        actor: ActorId,
        position: Vector,
        assign_bounding_box: bool,
    ) -> Entity {
        let entity = spawn_ordered(world, (Sprite::new(actor), WorldPosition(position)));
        if assign_bounding_box {
            let size = Self::sprite_extents(actor);
            world
                .entity_mut(entity)
                .insert(BoundingBox::of_size(size.width, size.height));
        }
        entity
    }

    fn create_actor(&mut self, world: &mut World, actor: ActorId, position: Vector) -> Entity {
        match actor {
            ActorId::PLAYER_SPAWN => spawn_ordered(world, (PlayerSpawn, WorldPosition(position))),

            ActorId::TELEPORTER => {
                let entity = self.create_sprite(world, actor, position, true);
                world
                    .entity_mut(entity)
                    .insert(Interactable::new(InteractableType::Teleporter));
                entity
            }

            ActorId::CARD_READER => {
                let entity = self.create_sprite(world, actor, position, true);
                world
                    .entity_mut(entity)
                    .insert(Interactable::new(InteractableType::ForceFieldCardReader));
                entity
            }

            ActorId::FORCE_FIELD => {
                let entity = self.create_sprite(world, actor, position, true);
                world.entity_mut(entity).insert(ForceField);
                entity
            }

            ActorId::LEVEL_EXIT => {
                let entity = self.create_sprite(world, actor, position, true);
                world.entity_mut(entity).insert(LevelExit);
                entity
            }

            _ => {
                let entity = self.create_sprite(world, actor, position, true);
                match Self::collectable_for(actor) {
                    Some(item) => {
                        world.entity_mut(entity).insert(item);
                    }
                    None => warn!(target: "game", "Unknown actor {:?}, created as decoration", actor),
                }
                entity
            }
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
    fn level_creation_returns_the_spawn_point() {
        let mut world = World::new();
        let actors = [
            ActorDescription::new(ActorId::RED_GEM, 5, 5),
            ActorDescription::new(ActorId::PLAYER_SPAWN, 2, 10),
        ];

        let spawn = StandardEntityFactory::new().create_entities_for_level(&mut world, &actors);

        let spawn = spawn.expect("spawn entity");
        assert!(world.get::<PlayerSpawn>(spawn).is_some());
        assert_eq!(
            world.get::<WorldPosition>(spawn),
            Some(&WorldPosition(Vector::new(2, 10)))
        );
        assert_eq!(world.entities().len(), 2);
    }

    #[test]
    fn level_without_spawn_yields_none() {
        let mut world = World::new();
        let actors = [ActorDescription::new(ActorId::TELEPORTER, 5, 5)];

        assert!(StandardEntityFactory::new()
            .create_entities_for_level(&mut world, &actors)
            .is_none());
    }

    #[test]
    fn card_reader_is_interactable() {
        let mut world = World::new();
        let reader =
            StandardEntityFactory::new().create_actor(&mut world, ActorId::CARD_READER, Vector::ZERO);

        assert_eq!(
            world.get::<Interactable>(reader).map(|i| i.kind),
            Some(InteractableType::ForceFieldCardReader)
        );
        assert!(world.get::<BoundingBox>(reader).is_some());
    }

    #[test]
    fn level_exit_is_a_plain_trigger() {
        let mut world = World::new();
        let exit = StandardEntityFactory::new().create_actor(
            &mut world,
            ActorId::LEVEL_EXIT,
            Vector::new(5, 9),
        );

        assert!(world.get::<LevelExit>(exit).is_some());
        assert!(world.get::<Interactable>(exit).is_none());
        assert!(world.get::<CollectableItem>(exit).is_none());
        assert_eq!(world.get::<BoundingBox>(exit), Some(&BoundingBox::of_size(3, 5)));
    }

    #[test]
    fn health_molecule_scores_more_at_full_health() {
        let mut world = World::new();
        let molecule = StandardEntityFactory::new().create_actor(
            &mut world,
            ActorId::HEALTH_MOLECULE,
            Vector::ZERO,
        );

        let item = world.get::<CollectableItem>(molecule).copied().unwrap();
        assert_eq!(item.given_score(false), Some(500));
        assert_eq!(item.given_score(true), Some(10000));
        assert_eq!(item.given_health, Some(1));
    }

    #[test]
    fn letters_carry_only_the_letter() {
        let mut world = World::new();
        let letter =
            StandardEntityFactory::new().create_actor(&mut world, ActorId::LETTER_K, Vector::ZERO);

        let item = world.get::<CollectableItem>(letter).copied().unwrap();
        assert_eq!(item.given_letter, Some(CollectableLetterType::K));
        assert_eq!(item.given_score(false), None);
    }

    #[test]
    fn projectiles_expire_after_their_range() {
        let mut world = World::new();
        let shot = StandardEntityFactory::new().create_projectile(
            &mut world,
            ProjectileType::Flame,
            Vector::new(4, 4),
            ProjectileDirection::Left,
        );

        assert_eq!(
            world.get::<Lifetime>(shot),
            Some(&Lifetime::ticks(ProjectileType::Flame.range()))
        );
        assert_eq!(
            world.get::<Projectile>(shot).map(|p| p.direction),
            Some(ProjectileDirection::Left)
        );
    }

    #[test]
    fn sprites_only_get_a_box_on_request() {
        let mut world = World::new();
        let mut factory = StandardEntityFactory::new();
        let plain = factory.create_sprite(&mut world, ActorId::RED_GEM, Vector::ZERO, false);
        let boxed = factory.create_sprite(&mut world, ActorId::RED_GEM, Vector::ZERO, true);

        assert!(world.get::<BoundingBox>(plain).is_none());
        assert!(world.get::<BoundingBox>(boxed).is_some());
    }
}
