//=========================================================================
// Force Fields
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;
use log::debug;

//=== Internal Dependencies ===============================================

use super::components::{ForceField, Interactable};
use crate::data::{InventoryItemType, PlayerModel};

//=========================================================================

/// Uses the player's circuit board on `card_reader`.
///
/// On success the board is consumed, every force field in the level is
/// removed and the reader stops being interactable. Returns `false`
/// without touching anything if the player has no board.
pub fn disable_force_field(
    world: &mut World,
    card_reader: Entity,
    player_model: &mut PlayerModel,
) -> bool {
    if !player_model.remove_item(InventoryItemType::CircuitBoard) {
        return false;
    }

    let fields: Vec<Entity> = world
        .query_filtered::<Entity, With<ForceField>>()
        .iter(world)
        .collect();
    for field in &fields {
        world.despawn(*field);
    }

    if let Some(mut reader) = world.get_entity_mut(card_reader) {
        reader.remove::<Interactable>();
    }

    debug!(target: "game", "Force field disabled, {} segments removed", fields.len());
    true
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::components::{spawn_ordered, InteractableType};

    fn level() -> (World, Entity) {
        let mut world = World::new();
        let reader = spawn_ordered(
            &mut world,
            Interactable::new(InteractableType::ForceFieldCardReader),
        );
        spawn_ordered(&mut world, ForceField);
        spawn_ordered(&mut world, ForceField);
        (world, reader)
    }

    fn force_field_count(world: &mut World) -> usize {
        world
            .query_filtered::<Entity, With<ForceField>>()
            .iter(world)
            .count()
    }

    #[test]
    fn circuit_board_opens_the_field() {
        let (mut world, reader) = level();
        let mut model = PlayerModel::new();
        model.give_item(InventoryItemType::CircuitBoard);

        assert!(disable_force_field(&mut world, reader, &mut model));

        assert_eq!(force_field_count(&mut world), 0);
        assert!(world.get::<Interactable>(reader).is_none());
        assert!(!model.has_item(InventoryItemType::CircuitBoard));
    }

    #[test]
    fn without_board_nothing_changes() {
        let (mut world, reader) = level();
        let mut model = PlayerModel::new();
        model.give_item(InventoryItemType::BlueKey);

        assert!(!disable_force_field(&mut world, reader, &mut model));

        assert_eq!(force_field_count(&mut world), 2);
        assert!(world.get::<Interactable>(reader).is_some());
        assert!(model.has_item(InventoryItemType::BlueKey));
    }
}
