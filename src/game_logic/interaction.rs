//=========================================================================
// Player Interaction
//=========================================================================
//
// Resolves contact between the player and level objects once per tick.
//
//   update_player_interaction   teleporters, card readers (interact key)
//   update_item_collection      pickups (on touch)
//
// Both scans visit entities in spawn order. Effects go to the player
// model and world directly. Everything the play mode must react to is
// emitted on the event bus for delivery later in the same tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::components::{
    spawn_order_key, BoundingBox, CollectableItem, Interactable, InteractableType, SpawnOrder,
    WorldPosition,
};
use super::entity_factory::EntityFactory;
use super::force_field::disable_force_field;
use super::player::Player;
use super::score_numbers::{
    spawn_floating_score_number, spawn_letter_bonus_numbers, spawn_score_numbers,
    ScoreNumberType,
};
use crate::core::error::InteractionError;
use crate::core::events::{EventBus, PlayerMessage, PlayerTeleported, TutorialMessage};
use crate::core::input::PlayerInput;
use crate::core::math::{Rect, Vector};
use crate::core::services::ServiceProvider;
use crate::data::{
    messages, CollectableLetterType, InventoryItemType, LetterCollectionState, PlayerModel,
    SoundId, TutorialMessageId,
};

//=== Constants ===========================================================

/// Score for a letter that breaks the sequence. Includes the out-of-order
/// completion bonus, which is granted on every such pickup.
const BASIC_LETTER_COLLECTION_SCORE: u32 = 10100;
const CORRECT_LETTER_COLLECTION_SCORE: u32 = 100_000;

const PLAYER_TO_TELEPORTER_OFFSET: Vector = Vector::new(1, 0);

//=== PlayerInteractionSystem =============================================

/// Borrows everything the resolver touches for the duration of one tick.
pub struct PlayerInteractionSystem<'a> {
    player: &'a mut Player,
    player_model: &'a mut PlayerModel,
    services: &'a mut dyn ServiceProvider,
    entity_factory: &'a mut dyn EntityFactory,
    events: &'a mut EventBus,
}

impl<'a> PlayerInteractionSystem<'a> {
    pub fn new(
        player: &'a mut Player,
        player_model: &'a mut PlayerModel,
        services: &'a mut dyn ServiceProvider,
        entity_factory: &'a mut dyn EntityFactory,
        events: &'a mut EventBus,
    ) -> Self {
        Self {
            player,
            player_model,
            services,
            entity_factory,
            events,
        }
    }

    //--- Interactables ----------------------------------------------------

    /// Uses the first interactable the player stands in front of, if the
    /// interact button was just pressed. Otherwise every touched object
    /// shows its hint.
    ///
    /// # Errors
    ///
    /// Fails if a used teleporter has no unique counterpart.
    pub fn update_player_interaction(
        &mut self,
        input: &PlayerInput,
        world: &mut World,
    ) -> Result<(), InteractionError> {
        if self.player.is_dead() {
            return Ok(());
        }

        let interaction_wanted = input.interact.was_triggered;
        let player_bounds = self.player.world_space_hit_box();

        for (entity, kind) in touched_interactables(world, &player_bounds) {
            if interaction_wanted {
                return self.perform_interaction(world, entity, kind);
            }
            self.show_tutorial_message(kind.tutorial_message());
        }
        Ok(())
    }

    fn perform_interaction(
        &mut self,
        world: &mut World,
        entity: Entity,
        kind: InteractableType,
    ) -> Result<(), InteractionError> {
        debug!(target: "interaction", "Player uses {:?} {:?}", kind, entity);

        match kind {
            InteractableType::Teleporter => {
                let target_position = find_teleporter_target(world, entity)?;
                self.events.emit(PlayerTeleported { target_position });
            }

            InteractableType::ForceFieldCardReader => {
                if disable_force_field(world, entity, self.player_model) {
                    self.player.do_interaction_animation();
                    self.show_message(messages::ACCESS_GRANTED);
                } else {
                    self.show_tutorial_message(TutorialMessageId::AccessCardNeeded);
                }
            }
        }
        Ok(())
    }

    //--- Collectables -----------------------------------------------------

    /// Applies and removes every item the player touches.
    ///
    /// # Errors
    ///
    /// Never fails today. Returns `Result` so the play mode can treat both
    /// resolver steps alike.
    pub fn update_item_collection(&mut self, world: &mut World) -> Result<(), InteractionError> {
        if self.player.is_dead() {
            return Ok(());
        }

        let player_bounds = self.player.world_space_hit_box();
        for (entity, item, position) in touched_collectables(world, &player_bounds) {
            self.collect(world, &item, position);
            world.despawn(entity);
        }
        Ok(())
    }

    fn collect(&mut self, world: &mut World, item: &CollectableItem, position: Vector) {
        trace!(target: "interaction", "Collecting {:?} at {}", item, position);

        let mut sound = None;

        let at_full_health = self.player_model.is_at_full_health();
        if let Some(score) = item.given_score(at_full_health) {
            self.player_model.give_score(score);
            sound = Some(SoundId::ItemPickup);

            if item.spawn_score_numbers {
                spawn_score_numbers(&mut *self.entity_factory, world, position, score);
            }
        }

        if let Some(health) = item.given_health {
            self.player_model.give_health(health);
            sound = Some(SoundId::HealthPickup);
        }

        if let Some(weapon) = item.given_weapon {
            self.player_model.switch_to_weapon(weapon);
            sound = Some(SoundId::WeaponPickup);
        }

        if let Some(inventory_item) = item.given_item {
            self.player_model.give_item(inventory_item);
            sound = Some(match inventory_item {
                InventoryItemType::RapidFire => SoundId::WeaponPickup,
                _ => SoundId::ItemPickup,
            });

            if inventory_item == InventoryItemType::SpecialHintGlobe {
                self.show_message(messages::FOUND_SPECIAL_HINT_GLOBE);
            }
        }

        if let Some(letter) = item.given_letter {
            self.collect_letter(world, letter, position);
        }

        if let Some(id) = item.shown_tutorial_message {
            self.show_tutorial_message(id);
        }

        if let Some(sound) = sound {
            self.services.play_sound(sound);
        }
    }

    fn collect_letter(&mut self, world: &mut World, letter: CollectableLetterType, position: Vector) {
        let state = self.player_model.add_collected_letter(letter);
        debug!(target: "interaction", "Letter {:?} collected, sequence {:?}", letter, state);

        if state == LetterCollectionState::InOrder {
            self.services.play_sound(SoundId::LettersCollectedCorrectly);
            self.player_model.give_score(CORRECT_LETTER_COLLECTION_SCORE);
            spawn_letter_bonus_numbers(&mut *self.entity_factory, world, position);
            self.show_tutorial_message(TutorialMessageId::LettersCollectedRightOrder);
            return;
        }

        self.services.play_sound(SoundId::ItemPickup);
        self.player_model.give_score(BASIC_LETTER_COLLECTION_SCORE);
        spawn_floating_score_number(
            &mut *self.entity_factory,
            world,
            ScoreNumberType::S100,
            position,
        );

        if state == LetterCollectionState::WrongOrder {
            self.show_message(messages::LETTERS_COLLECTED_WRONG_ORDER);
        }
    }

    //--- Events -----------------------------------------------------------

    fn show_message(&mut self, text: &str) {
        self.events.emit(PlayerMessage::new(text));
    }

    fn show_tutorial_message(&mut self, id: TutorialMessageId) {
        self.events.emit(TutorialMessage::new(id));
    }
}

//=== Queries =============================================================

fn touched_interactables(world: &mut World, player_bounds: &Rect) -> Vec<(Entity, InteractableType)> {
    let mut query = world.query::<(
        Entity,
        &Interactable,
        &WorldPosition,
        &BoundingBox,
        Option<&SpawnOrder>,
    )>();

    let mut touched: Vec<_> = query
        .iter(world)
        .filter(|(_, _, position, bbox, _)| bbox.to_world_space(position).intersects(player_bounds))
        .map(|(entity, interactable, _, _, order)| {
            (spawn_order_key(entity, order), entity, interactable.kind)
        })
        .collect();

    touched.sort_by_key(|(key, _, _)| *key);
    touched
        .into_iter()
        .map(|(_, entity, kind)| (entity, kind))
        .collect()
}

fn touched_collectables(
    world: &mut World,
    player_bounds: &Rect,
) -> Vec<(Entity, CollectableItem, Vector)> {
    let mut query = world.query::<(
        Entity,
        &CollectableItem,
        &WorldPosition,
        &BoundingBox,
        Option<&SpawnOrder>,
    )>();

    let mut touched: Vec<_> = query
        .iter(world)
        .filter(|(_, _, position, bbox, _)| bbox.to_world_space(position).intersects(player_bounds))
        .map(|(entity, item, position, _, order)| {
            (spawn_order_key(entity, order), entity, *item, position.0)
        })
        .collect();

    touched.sort_by_key(|(key, _, _, _)| *key);
    touched
        .into_iter()
        .map(|(_, entity, item, position)| (entity, item, position))
        .collect()
}

/// Where the player lands when using `source`: next to the one other
/// teleporter in the level.
fn find_teleporter_target(world: &mut World, source: Entity) -> Result<Vector, InteractionError> {
    let source_position = world
        .get::<WorldPosition>(source)
        .map(|p| p.0)
        .ok_or(InteractionError::MissingTeleporterTarget {
            source_entity: source,
        })?;

    let mut query = world.query::<(&Interactable, &WorldPosition)>();
    let targets: Vec<Vector> = query
        .iter(world)
        .filter(|(interactable, position)| {
            interactable.kind == InteractableType::Teleporter && position.0 != source_position
        })
        .map(|(_, position)| position.0)
        .collect();

    match targets.as_slice() {
        [target] => Ok(*target + PLAYER_TO_TELEPORTER_OFFSET),
        [] => Err(InteractionError::MissingTeleporterTarget {
            source_entity: source,
        }),
        _ => Err(InteractionError::AmbiguousTeleporterTarget {
            source_entity: source,
            count: targets.len(),
        }),
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Button;
    use crate::data::WeaponType;
    use crate::game_logic::components::{spawn_ordered, ForceField};
    use crate::game_logic::score_numbers::ScoreNumber;
    use crate::testing::{MockEntityFactory, MockServiceProvider};

    //=====================================================================
    // Fixture
    //=====================================================================

    const PLAYER_POSITION: Vector = Vector::new(10, 20);

    struct Fixture {
        world: World,
        player: Player,
        model: PlayerModel,
        services: MockServiceProvider,
        factory: MockEntityFactory,
        events: EventBus,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                world: World::new(),
                player: Player::new(PLAYER_POSITION),
                model: PlayerModel::new(),
                services: MockServiceProvider::new(),
                factory: MockEntityFactory::new(),
                events: EventBus::new(),
            }
        }

        fn system(&mut self) -> (PlayerInteractionSystem<'_>, &mut World) {
            (
                PlayerInteractionSystem::new(
                    &mut self.player,
                    &mut self.model,
                    &mut self.services,
                    &mut self.factory,
                    &mut self.events,
                ),
                &mut self.world,
            )
        }

        fn collect(&mut self) {
            let (mut system, world) = self.system();
            assert_eq!(system.update_item_collection(world), Ok(()));
        }

        fn interact(&mut self, interact: Button) -> Result<(), InteractionError> {
            let input = PlayerInput {
                interact,
                ..Default::default()
            };
            let (mut system, world) = self.system();
            system.update_player_interaction(&input, world)
        }

        fn spawn_item(&mut self, item: CollectableItem, position: Vector) -> Entity {
            spawn_ordered(
                &mut self.world,
                (item, WorldPosition(position), BoundingBox::of_size(1, 1)),
            )
        }

        fn spawn_interactable(&mut self, kind: InteractableType, position: Vector) -> Entity {
            spawn_ordered(
                &mut self.world,
                (
                    Interactable::new(kind),
                    WorldPosition(position),
                    BoundingBox::of_size(2, 2),
                ),
            )
        }

        fn tutorials(&self) -> Vec<TutorialMessageId> {
            self.events.read::<TutorialMessage>().iter().map(|m| m.id).collect()
        }

        fn messages(&self) -> Vec<String> {
            self.events
                .read::<PlayerMessage>()
                .iter()
                .map(|m| m.text.clone())
                .collect()
        }

        fn score_numbers(&mut self) -> Vec<ScoreNumberType> {
            let mut query = self.world.query::<(&ScoreNumber, &SpawnOrder)>();
            let mut found: Vec<_> = query.iter(&self.world).map(|(n, o)| (*o, n.kind)).collect();
            found.sort_by_key(|(o, _)| *o);
            found.into_iter().map(|(_, kind)| kind).collect()
        }
    }

    fn scored(score: u32) -> CollectableItem {
        CollectableItem {
            given_score: Some(score),
            spawn_score_numbers: true,
            ..Default::default()
        }
    }

    fn letter(letter: CollectableLetterType) -> CollectableItem {
        CollectableItem {
            given_letter: Some(letter),
            ..Default::default()
        }
    }

    //=====================================================================
    // Item Collection
    //=====================================================================

    #[test]
    fn touched_item_is_applied_and_removed() {
        let mut f = Fixture::new();
        let item = f.spawn_item(scored(500), PLAYER_POSITION);

        f.collect();

        assert_eq!(f.model.score(), 500);
        assert_eq!(f.services.sounds, vec![SoundId::ItemPickup]);
        assert!(f.world.get_entity(item).is_none());
        assert_eq!(f.score_numbers(), vec![ScoreNumberType::S500]);
    }

    #[test]
    fn score_pickup_of_10100_spawns_greedy_stack() {
        let mut f = Fixture::new();
        assert_eq!(f.model.health(), crate::data::MAX_HEALTH);
        let item = f.spawn_item(scored(10100), PLAYER_POSITION);

        f.collect();

        assert_eq!(f.model.score(), 10100);
        assert_eq!(f.services.sounds, vec![SoundId::ItemPickup]);
        assert!(f.world.get_entity(item).is_none());

        let mut query = f
            .world
            .query::<(&ScoreNumber, &WorldPosition, &SpawnOrder)>();
        let mut numbers: Vec<_> = query
            .iter(&f.world)
            .map(|(number, position, order)| (*order, number.kind, position.0))
            .collect();
        numbers.sort_by_key(|(order, _, _)| *order);
        let numbers: Vec<_> = numbers.into_iter().map(|(_, kind, pos)| (kind, pos)).collect();

        assert_eq!(
            numbers,
            vec![
                (ScoreNumberType::S10000, PLAYER_POSITION - Vector::new(0, 1)),
                (ScoreNumberType::S100, PLAYER_POSITION),
            ]
        );
    }

    #[test]
    fn items_out_of_reach_stay() {
        let mut f = Fixture::new();
        let item = f.spawn_item(scored(500), PLAYER_POSITION + Vector::new(3, 0));

        f.collect();

        assert_eq!(f.model.score(), 0);
        assert!(f.services.sounds.is_empty());
        assert!(f.world.get_entity(item).is_some());
    }

    #[test]
    fn item_is_removed_even_without_effects() {
        let mut f = Fixture::new();
        let item = f.spawn_item(CollectableItem::default(), PLAYER_POSITION);

        f.collect();

        assert!(f.world.get_entity(item).is_none());
        assert!(f.services.sounds.is_empty());
        assert_eq!(f.events.total_count(), 0);
    }

    #[test]
    fn score_without_numbers_flag_spawns_nothing() {
        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_score: Some(2000),
                ..Default::default()
            },
            PLAYER_POSITION,
        );

        f.collect();

        assert_eq!(f.model.score(), 2000);
        assert!(f.score_numbers().is_empty());
    }

    #[test]
    fn full_health_score_is_used_at_full_health() {
        let mut f = Fixture::new();
        let molecule = CollectableItem {
            given_score_at_full_health: Some(10000),
            given_health: Some(1),
            ..scored(500)
        };
        f.spawn_item(molecule, PLAYER_POSITION);

        f.collect();

        assert_eq!(f.model.score(), 10000);
        assert_eq!(f.score_numbers(), vec![ScoreNumberType::S10000]);
    }

    #[test]
    fn regular_score_is_used_when_hurt() {
        let mut f = Fixture::new();
        f.model.take_damage(2);
        let molecule = CollectableItem {
            given_score_at_full_health: Some(10000),
            given_health: Some(1),
            ..scored(500)
        };
        f.spawn_item(molecule, PLAYER_POSITION);

        f.collect();

        assert_eq!(f.model.score(), 500);
        assert_eq!(f.model.health(), crate::data::MAX_HEALTH - 1);
    }

    #[test]
    fn last_applicable_effect_picks_the_sound() {
        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_health: Some(1),
                ..scored(100)
            },
            PLAYER_POSITION,
        );
        f.collect();
        assert_eq!(f.services.sounds, vec![SoundId::HealthPickup]);

        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_weapon: Some(WeaponType::Laser),
                ..scored(2000)
            },
            PLAYER_POSITION,
        );
        f.collect();
        assert_eq!(f.services.sounds, vec![SoundId::WeaponPickup]);
        assert_eq!(f.model.weapon(), WeaponType::Laser);
    }

    #[test]
    fn rapid_fire_plays_the_weapon_sound() {
        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_item: Some(InventoryItemType::RapidFire),
                ..scored(500)
            },
            PLAYER_POSITION,
        );

        f.collect();

        assert_eq!(f.services.sounds, vec![SoundId::WeaponPickup]);
        assert!(f.model.has_item(InventoryItemType::RapidFire));
    }

    #[test]
    fn hint_globe_shows_a_message() {
        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_item: Some(InventoryItemType::SpecialHintGlobe),
                ..Default::default()
            },
            PLAYER_POSITION,
        );

        f.collect();

        assert_eq!(f.services.sounds, vec![SoundId::ItemPickup]);
        assert_eq!(f.messages(), vec![messages::FOUND_SPECIAL_HINT_GLOBE]);
    }

    #[test]
    fn item_tutorial_is_emitted() {
        let mut f = Fixture::new();
        f.spawn_item(
            CollectableItem {
                given_item: Some(InventoryItemType::CircuitBoard),
                shown_tutorial_message: Some(TutorialMessageId::FoundCircuitBoard),
                ..Default::default()
            },
            PLAYER_POSITION,
        );

        f.collect();

        assert_eq!(f.tutorials(), vec![TutorialMessageId::FoundCircuitBoard]);
    }

    #[test]
    fn dead_player_collects_nothing() {
        let mut f = Fixture::new();
        f.player.die();
        let item = f.spawn_item(scored(500), PLAYER_POSITION);

        f.collect();

        assert!(f.world.get_entity(item).is_some());
        assert_eq!(f.model.score(), 0);
    }

    //=====================================================================
    // Letters
    //=====================================================================

    #[test]
    fn first_letter_counts_as_in_order() {
        let mut f = Fixture::new();
        f.spawn_item(letter(CollectableLetterType::K), PLAYER_POSITION);

        f.collect();

        assert_eq!(f.model.score(), CORRECT_LETTER_COLLECTION_SCORE);
        assert_eq!(f.services.sounds, vec![SoundId::LettersCollectedCorrectly]);
        assert_eq!(f.score_numbers(), vec![ScoreNumberType::S10000; 10]);
        assert_eq!(f.tutorials(), vec![TutorialMessageId::LettersCollectedRightOrder]);
        assert!(f.messages().is_empty());
    }

    #[test]
    fn letters_in_sequence_keep_the_big_bonus() {
        let mut f = Fixture::new();
        f.spawn_item(letter(CollectableLetterType::N), PLAYER_POSITION);
        f.collect();
        f.spawn_item(letter(CollectableLetterType::U), PLAYER_POSITION);
        f.collect();

        assert_eq!(f.model.score(), 2 * CORRECT_LETTER_COLLECTION_SCORE);
        assert_eq!(f.services.last_sound(), Some(SoundId::LettersCollectedCorrectly));
    }

    #[test]
    fn letter_out_of_sequence_breaks_it_for_good() {
        let mut f = Fixture::new();
        f.spawn_item(letter(CollectableLetterType::N), PLAYER_POSITION);
        f.collect();
        f.events.clear_all();

        f.spawn_item(letter(CollectableLetterType::E), PLAYER_POSITION);
        f.collect();

        assert_eq!(
            f.model.score(),
            CORRECT_LETTER_COLLECTION_SCORE + BASIC_LETTER_COLLECTION_SCORE
        );
        assert_eq!(f.services.last_sound(), Some(SoundId::ItemPickup));
        assert_eq!(f.messages(), vec![messages::LETTERS_COLLECTED_WRONG_ORDER]);
        assert!(f.tutorials().is_empty());
        assert_eq!(f.score_numbers().last(), Some(&ScoreNumberType::S100));

        // Even the canonical successor of E no longer helps
        f.events.clear_all();
        f.spawn_item(letter(CollectableLetterType::M), PLAYER_POSITION);
        f.collect();

        assert_eq!(
            f.model.score(),
            CORRECT_LETTER_COLLECTION_SCORE + 2 * BASIC_LETTER_COLLECTION_SCORE
        );
        assert_eq!(f.messages(), vec![messages::LETTERS_COLLECTED_WRONG_ORDER]);
    }

    //=====================================================================
    // Interactables
    //=====================================================================

    #[test]
    fn standing_in_front_shows_hints_for_every_object() {
        let mut f = Fixture::new();
        f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);
        f.spawn_interactable(InteractableType::ForceFieldCardReader, PLAYER_POSITION);

        assert_eq!(f.interact(Button::default()), Ok(()));
        assert_eq!(f.interact(Button::HELD), Ok(()));

        assert_eq!(
            f.tutorials(),
            vec![
                TutorialMessageId::FoundTeleporter,
                TutorialMessageId::FoundForceField,
                TutorialMessageId::FoundTeleporter,
                TutorialMessageId::FoundForceField,
            ]
        );
    }

    #[test]
    fn teleporter_moves_player_next_to_its_counterpart() {
        let mut f = Fixture::new();
        f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);
        f.spawn_interactable(InteractableType::Teleporter, Vector::new(70, 20));

        assert_eq!(f.interact(Button::TRIGGERED), Ok(()));

        assert_eq!(
            f.events.read::<PlayerTeleported>(),
            &[PlayerTeleported {
                target_position: Vector::new(71, 20)
            }]
        );
        assert!(f.tutorials().is_empty());
    }

    #[test]
    fn lone_teleporter_is_an_error() {
        let mut f = Fixture::new();
        let source = f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);

        assert_eq!(
            f.interact(Button::TRIGGERED),
            Err(InteractionError::MissingTeleporterTarget {
                source_entity: source
            })
        );
    }

    #[test]
    fn several_targets_are_an_error() {
        let mut f = Fixture::new();
        let source = f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);
        f.spawn_interactable(InteractableType::Teleporter, Vector::new(40, 20));
        f.spawn_interactable(InteractableType::Teleporter, Vector::new(70, 20));

        assert_eq!(
            f.interact(Button::TRIGGERED),
            Err(InteractionError::AmbiguousTeleporterTarget {
                source_entity: source,
                count: 2
            })
        );
    }

    #[test]
    fn only_one_interaction_per_tick() {
        let mut f = Fixture::new();
        f.model.give_item(InventoryItemType::CircuitBoard);
        f.spawn_interactable(InteractableType::ForceFieldCardReader, PLAYER_POSITION);
        f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);
        f.spawn_interactable(InteractableType::Teleporter, Vector::new(70, 20));

        assert_eq!(f.interact(Button::TRIGGERED), Ok(()));

        assert_eq!(f.messages(), vec![messages::ACCESS_GRANTED]);
        assert!(!f.events.has_events::<PlayerTeleported>());
        assert!(f.tutorials().is_empty());
    }

    #[test]
    fn card_reader_with_board_grants_access() {
        let mut f = Fixture::new();
        f.model.give_item(InventoryItemType::CircuitBoard);
        let reader = f.spawn_interactable(InteractableType::ForceFieldCardReader, PLAYER_POSITION);
        spawn_ordered(&mut f.world, (ForceField, WorldPosition(Vector::new(20, 20))));

        assert_eq!(f.interact(Button::TRIGGERED), Ok(()));

        assert!(f.player.is_interacting());
        assert_eq!(f.messages(), vec![messages::ACCESS_GRANTED]);
        assert!(f.world.get::<Interactable>(reader).is_none());
        assert!(!f.model.has_item(InventoryItemType::CircuitBoard));
    }

    #[test]
    fn card_reader_without_board_asks_for_one() {
        let mut f = Fixture::new();
        let reader = f.spawn_interactable(InteractableType::ForceFieldCardReader, PLAYER_POSITION);

        assert_eq!(f.interact(Button::TRIGGERED), Ok(()));

        assert_eq!(f.tutorials(), vec![TutorialMessageId::AccessCardNeeded]);
        assert!(f.messages().is_empty());
        assert!(!f.player.is_interacting());
        assert!(f.world.get::<Interactable>(reader).is_some());
    }

    #[test]
    fn dead_player_cannot_interact() {
        let mut f = Fixture::new();
        f.player.die();
        f.spawn_interactable(InteractableType::Teleporter, PLAYER_POSITION);

        assert_eq!(f.interact(Button::TRIGGERED), Ok(()));
        assert_eq!(f.events.total_count(), 0);
    }
}
