//=========================================================================
// Player
//=========================================================================
//
// The player character's in-level state: position, facing and what it
// is currently doing. Persistent progress (score, health, inventory)
// lives in `PlayerModel`.
//
// States:
//   Normal ──do_interaction_animation()──→ Interacting ──(N ticks)──→ Normal
//      └─────────────────die()──────────────────────────────→ Dead
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::components::BoundingBox;
use super::entity_factory::ProjectileDirection;
use crate::core::input::PlayerInput;
use crate::core::math::{Rect, Vector};
use crate::data::ActorId;

//=== Constants ===========================================================

const HIT_BOX_WIDTH: i32 = 3;
const HIT_BOX_HEIGHT: i32 = 5;

const INTERACTION_ANIMATION_TICKS: u32 = 8;

/// Offset of the weapon muzzle from the player position.
const MUZZLE_OFFSET_RIGHT: Vector = Vector::new(3, -2);
const MUZZLE_OFFSET_LEFT: Vector = Vector::new(-2, -2);

//=== Types ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Left,
    #[default]
    Right,
}

impl Orientation {
    pub fn shot_direction(self) -> ProjectileDirection {
        match self {
            Self::Left => ProjectileDirection::Left,
            Self::Right => ProjectileDirection::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerState {
    Normal,
    Interacting { ticks_left: u32 },
    Dead,
}

//=== Player ==============================================================

#[derive(Debug, Clone)]
pub struct Player {
    position: Vector,
    orientation: Orientation,
    state: PlayerState,
    bounds: BoundingBox,
}

impl Player {
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            orientation: Orientation::default(),
            state: PlayerState::Normal,
            bounds: BoundingBox::of_size(HIT_BOX_WIDTH, HIT_BOX_HEIGHT),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hit box in world space, bottom edge on the player's position.
    pub fn world_space_hit_box(&self) -> Rect {
        self.bounds.0.to_world_space(self.position)
    }

    pub fn is_dead(&self) -> bool {
        self.state == PlayerState::Dead
    }

    pub fn is_interacting(&self) -> bool {
        matches!(self.state, PlayerState::Interacting { .. })
    }

    /// Where shots leave the weapon.
    pub fn muzzle_position(&self) -> Vector {
        match self.orientation {
            Orientation::Left => self.position + MUZZLE_OFFSET_LEFT,
            Orientation::Right => self.position + MUZZLE_OFFSET_RIGHT,
        }
    }

    //--- Mutation ---------------------------------------------------------

    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn die(&mut self) {
        self.state = PlayerState::Dead;
    }

    /// Plays the "using something" animation. Movement is blocked until
    /// it finishes.
    pub fn do_interaction_animation(&mut self) {
        if !self.is_dead() {
            self.state = PlayerState::Interacting {
                ticks_left: INTERACTION_ANIMATION_TICKS,
            };
        }
    }

    /// Advances one simulation tick.
    pub fn update(&mut self, input: &PlayerInput) {
        match self.state {
            PlayerState::Dead => {}
            PlayerState::Interacting { ticks_left } => {
                self.state = match ticks_left.saturating_sub(1) {
                    0 => PlayerState::Normal,
                    ticks_left => PlayerState::Interacting { ticks_left },
                };
            }
            PlayerState::Normal => {
                if input.left && !input.right {
                    self.orientation = Orientation::Left;
                    self.position.x -= 1;
                } else if input.right && !input.left {
                    self.orientation = Orientation::Right;
                    self.position.x += 1;
                }
            }
        }
    }

    //--- Rendering --------------------------------------------------------

    /// Sprite frame for the current state.
    pub fn sprite(&self) -> (ActorId, usize) {
        let frame = match (self.state, self.orientation) {
            (PlayerState::Dead, _) => 8,
            (PlayerState::Interacting { .. }, _) => 7,
            (PlayerState::Normal, Orientation::Left) => 0,
            (PlayerState::Normal, Orientation::Right) => 4,
        };
        (ActorId::PLAYER, frame)
    }
}

//=========================================================================
// Tests
//=========================================================================
