//=========================================================================
// HUD
//=========================================================================
//
// Status bar and message line of the play mode.
//
//   row 0          message line (one message at a time)
//   rows 22..=24   score, health, weapon/ammo, inventory, letters
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::math::Vector;
use crate::core::services::{Renderer, SpriteSheetRenderer, TextRenderer};
use crate::data::{CollectableLetterType, InventoryItemType, PlayerModel, WeaponType};

//=== Layout ==============================================================

const MESSAGE_POSITION: Vector = Vector::new(1, 0);
const MESSAGE_WIDTH: usize = 38;

const SCORE_POSITION: Vector = Vector::new(1, 22);
const HEALTH_POSITION: Vector = Vector::new(1, 23);
const WEAPON_POSITION: Vector = Vector::new(14, 22);
const INVENTORY_POSITION: Vector = Vector::new(28, 22);
const LETTERS_POSITION: Vector = Vector::new(14, 23);

/// Ticks a message stays on screen.
pub const MESSAGE_DURATION_TICKS: u32 = 45;

//=== Sprite Sheet Tiles ==================================================

fn inventory_tile(item: InventoryItemType) -> usize {
    match item {
        InventoryItemType::CircuitBoard => 0,
        InventoryItemType::BlueKey => 1,
        InventoryItemType::RapidFire => 2,
        InventoryItemType::SpecialHintGlobe => 3,
        InventoryItemType::CloakingDevice => 4,
    }
}

fn letter_tile(letter: CollectableLetterType) -> usize {
    match letter {
        CollectableLetterType::N => 10,
        CollectableLetterType::U => 11,
        CollectableLetterType::K => 12,
        CollectableLetterType::E => 13,
        CollectableLetterType::M => 14,
    }
}

fn weapon_name(weapon: WeaponType) -> &'static str {
    match weapon {
        WeaponType::Normal => "REGULAR",
        WeaponType::Laser => "LASER",
        WeaponType::Rocket => "ROCKET",
        WeaponType::FlameThrower => "FLAMER",
    }
}

//=== Hud =================================================================

#[derive(Debug, Default)]
pub struct Hud {
    current: Option<(String, u32)>,
    queued: VecDeque<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message. Messages are shown one after another.
    pub fn show_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!(target: "game", "HUD message: {}", text);
        if self.current.is_none() {
            self.current = Some((text, MESSAGE_DURATION_TICKS));
        } else {
            self.queued.push_back(text);
        }
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|(text, _)| text.as_str())
    }

    /// Advances message timing by one tick.
    pub fn update(&mut self) {
        let Some((_, ticks_left)) = &mut self.current else { return };

        *ticks_left = ticks_left.saturating_sub(1);
        if *ticks_left == 0 {
            self.current = self
                .queued
                .pop_front()
                .map(|text| (text, MESSAGE_DURATION_TICKS));
        }
    }

    pub fn render(
        &self,
        model: &PlayerModel,
        renderer: &mut dyn Renderer,
        text: &dyn TextRenderer,
        sprites: &dyn SpriteSheetRenderer,
    ) {
        if let Some(message) = self.current_message() {
            text.draw_wrapped_text(renderer, MESSAGE_POSITION, MESSAGE_WIDTH, message);
        }

        text.draw_text(renderer, SCORE_POSITION, &format!("SCORE {:07}", model.score()));
        text.draw_text(renderer, HEALTH_POSITION, &format!("HEALTH {}", model.health()));

        let weapon = match model.weapon() {
            WeaponType::Normal => weapon_name(WeaponType::Normal).to_owned(),
            other => format!("{} {}", weapon_name(other), model.ammo()),
        };
        text.draw_text(renderer, WEAPON_POSITION, &weapon);

        for (slot, item) in model.inventory().iter().enumerate() {
            let position = INVENTORY_POSITION + Vector::new(2 * slot as i32, 0);
            sprites.draw_tile(renderer, inventory_tile(*item), position);
        }

        for (slot, letter) in model.letters().collected().iter().enumerate() {
            let position = LETTERS_POSITION + Vector::new(slot as i32, 0);
            sprites.draw_tile(renderer, letter_tile(*letter), position);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
