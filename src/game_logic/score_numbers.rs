//=========================================================================
// Floating Score Numbers
//=========================================================================
//
// Cosmetic numbers that rise from a pickup and vanish.
//
// A score is split greedily into the available denominations, largest
// first. The resulting numbers are stacked on top of each other with the
// largest one at the top:
//
//   score 2700 at (x, y):   2000  (x, y - 2)
//                            500  (x, y - 1)
//                            200  (x, y)
//
//=========================================================================

//=== External Dependencies ===============================================

use bevy_ecs::prelude::*;

//=== Internal Dependencies ===============================================

use super::components::{Lifetime, WorldPosition};
use super::entity_factory::EntityFactory;
use crate::core::math::Vector;
use crate::data::ActorId;

//=== ScoreNumberType =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreNumberType {
    S10000,
    S5000,
    S2000,
    S1000,
    S500,
    S200,
    S100,
}

impl ScoreNumberType {
    /// All denominations, largest first.
    pub const ITEMS: [Self; 7] = [
        Self::S10000,
        Self::S5000,
        Self::S2000,
        Self::S1000,
        Self::S500,
        Self::S200,
        Self::S100,
    ];

    pub fn value(self) -> u32 {
        match self {
            Self::S10000 => 10000,
            Self::S5000 => 5000,
            Self::S2000 => 2000,
            Self::S1000 => 1000,
            Self::S500 => 500,
            Self::S200 => 200,
            Self::S100 => 100,
        }
    }

    pub fn actor_id(self) -> ActorId {
        match self {
            Self::S10000 => ActorId::SCORE_NUMBER_10000,
            Self::S5000 => ActorId::SCORE_NUMBER_5000,
            Self::S2000 => ActorId::SCORE_NUMBER_2000,
            Self::S1000 => ActorId::SCORE_NUMBER_1000,
            Self::S500 => ActorId::SCORE_NUMBER_500,
            Self::S200 => ActorId::SCORE_NUMBER_200,
            Self::S100 => ActorId::SCORE_NUMBER_100,
        }
    }
}

//=== Component ===========================================================

/// Vertical movement per tick. The number is removed after the last step.
const FLOAT_SEQUENCE: [i32; 12] = [-1, -1, 0, -1, 0, 0, -1, 0, 0, 0, 0, 0];

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreNumber {
    pub kind: ScoreNumberType,
    ticks_elapsed: usize,
}

impl ScoreNumber {
    pub fn new(kind: ScoreNumberType) -> Self {
        Self {
            kind,
            ticks_elapsed: 0,
        }
    }
}

//=== Decomposition =======================================================

/// Splits `score` into denominations, largest first. Remainders below
/// the smallest denomination are dropped.
pub fn decompose_score(mut score: u32) -> Vec<ScoreNumberType> {
    let mut numbers = Vec::new();
    for kind in ScoreNumberType::ITEMS {
        let value = kind.value();
        while score >= value {
            numbers.push(kind);
            score -= value;
        }
    }
    numbers
}

//=== Spawning ============================================================

/// Spawns one number that floats up from `position`.
pub fn spawn_floating_score_number(
    factory: &mut dyn EntityFactory,
    world: &mut World,
    kind: ScoreNumberType,
    position: Vector,
) -> Entity {
    let entity = factory.create_sprite(world, kind.actor_id(), position, false);
    if let Some(mut number) = world.get_entity_mut(entity) {
        number.insert((
            ScoreNumber::new(kind),
            Lifetime::ticks(FLOAT_SEQUENCE.len() as u32),
        ));
    }
    entity
}

/// Spawns the stacked numbers for `score` with the smallest one at
/// `position`.
pub fn spawn_score_numbers(
    factory: &mut dyn EntityFactory,
    world: &mut World,
    position: Vector,
    score: u32,
) {
    let numbers = decompose_score(score);
    let top = numbers.len() as i32 - 1;

    for (index, kind) in numbers.into_iter().enumerate() {
        let offset = Vector::new(0, top - index as i32);
        spawn_floating_score_number(factory, world, kind, position - offset);
    }
}

/// Ten 10000s fanned out above `position` for a correctly ordered letter.
pub fn spawn_letter_bonus_numbers(
    factory: &mut dyn EntityFactory,
    world: &mut World,
    position: Vector,
) {
    const X_OFFSETS: [i32; 4] = [-3, 0, 3, 0];

    for i in 0..10 {
        let offset = Vector::new(X_OFFSETS[i % 4], -(i as i32));
        spawn_floating_score_number(factory, world, ScoreNumberType::S10000, position + offset);
    }
}

//=== Update ==============================================================

/// Moves every number one step along its float path. Expiry is handled
/// by the numbers' [`Lifetime`].
pub fn update_score_numbers(world: &mut World) {
    let mut query = world.query::<(&mut ScoreNumber, &mut WorldPosition)>();
    for (mut number, mut position) in query.iter_mut(world) {
        if let Some(dy) = FLOAT_SEQUENCE.get(number.ticks_elapsed) {
            position.0.y += dy;
        }
        number.ticks_elapsed += 1;
    }
}

//=========================================================================
// Tests
//=========================================================================
