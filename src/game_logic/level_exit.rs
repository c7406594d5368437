//=========================================================================
// Level Exit
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;

//=== Internal Dependencies ===============================================

use super::components::{BoundingBox, LevelExit, WorldPosition};
use super::player::Player;

//=========================================================================

/// `true` once a living player touches a level exit.
pub fn player_reached_exit(world: &mut World, player: &Player) -> bool {
    if player.is_dead() {
        return false;
    }

    let hit_box = player.world_space_hit_box();
    world
        .query_filtered::<(&WorldPosition, &BoundingBox), With<LevelExit>>()
        .iter(world)
        .any(|(position, bounds)| bounds.to_world_space(position).intersects(&hit_box))
}

//=========================================================================
// Tests
//=========================================================================
