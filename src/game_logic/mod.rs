//=========================================================================
// Game Logic
//=========================================================================
//
// Level simulation on top of a `bevy_ecs::World`.
//
// Tick order inside the play mode:
//   Player::update → WeaponSystem → PlayerInteractionSystem
//     (interaction, then collection) → projectiles / score numbers
//     → age_entities
//
// Nothing here keeps a reference to the world between ticks. Systems
// borrow the world and their collaborators for one call.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod components;
pub mod entity_factory;
pub mod force_field;
pub mod interaction;
pub mod level_exit;
pub mod player;
pub mod score_numbers;
pub mod weapons;

//=== Public API ==========================================================

pub use entity_factory::{
    EntityFactory, Projectile, ProjectileDirection, ProjectileType, StandardEntityFactory,
};
pub use force_field::disable_force_field;
pub use interaction::PlayerInteractionSystem;
pub use level_exit::player_reached_exit;
pub use player::{Orientation, Player};
pub use score_numbers::{ScoreNumber, ScoreNumberType};
pub use weapons::WeaponSystem;
