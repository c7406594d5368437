//=========================================================================
// Player Model
//=========================================================================
//
// Long-lived progression state of the player: score, health, weapon and
// ammo, inventory, story-letter progress and the set of tutorial hints
// that were already shown.
//
// The model is owned by the game session and survives level changes.
// Within a level it is mutated only by the item collection and force
// field logic.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::{CollectableLetterType, InventoryItemType, TutorialMessageId, WeaponType};

//=== Constants ===========================================================

pub const MAX_HEALTH: i32 = 9;
pub const MAX_SCORE: u32 = 9_999_999;
pub const MAX_AMMO: u32 = 32;
pub const MAX_AMMO_FLAME_THROWER: u32 = 64;

//=== Letter Collection ===================================================

/// Progress of the story-letter sequence within the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCollectionState {
    /// No letter collected yet.
    #[default]
    Empty,

    /// Every letter so far followed the canonical order.
    InOrder,

    /// The sequence was broken. Stays like this until the level is reset.
    WrongOrder,
}

/// Collected letters plus the derived ordering state.
#[derive(Debug, Clone, Default)]
pub struct LetterCollection {
    collected: Vec<CollectableLetterType>,
    state: LetterCollectionState,
}

impl LetterCollection {
    /// Records a letter and returns the resulting state.
    ///
    /// The first letter always starts an in-order sequence. Later letters
    /// keep it in order only while each one is the canonical successor of
    /// the previous one.
    pub fn add(&mut self, letter: CollectableLetterType) -> LetterCollectionState {
        let next_state = match (self.state, self.collected.last()) {
            (LetterCollectionState::Empty, _) | (_, None) => LetterCollectionState::InOrder,
            (LetterCollectionState::InOrder, Some(last)) if last.successor() == Some(letter) => {
                LetterCollectionState::InOrder
            }
            _ => LetterCollectionState::WrongOrder,
        };

        self.collected.push(letter);
        self.state = next_state;
        next_state
    }

    pub fn state(&self) -> LetterCollectionState {
        self.state
    }

    pub fn collected(&self) -> &[CollectableLetterType] {
        &self.collected
    }

    pub fn clear(&mut self) {
        self.collected.clear();
        self.state = LetterCollectionState::Empty;
    }
}

//=== Tutorial Messages ===================================================

/// Tutorial hints already shown during this session.
#[derive(Debug, Clone, Default)]
pub struct TutorialMessageState {
    shown: HashSet<TutorialMessageId>,
}

impl TutorialMessageState {
    pub fn has_been_shown(&self, id: TutorialMessageId) -> bool {
        self.shown.contains(&id)
    }

    pub fn mark_as_shown(&mut self, id: TutorialMessageId) {
        self.shown.insert(id);
    }
}

//=== PlayerModel =========================================================

#[derive(Debug, Clone)]
pub struct PlayerModel {
    score: u32,
    health: i32,
    weapon: WeaponType,
    ammo: u32,
    inventory: Vec<InventoryItemType>,
    letters: LetterCollection,
    tutorial_messages: TutorialMessageState,
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerModel {
    pub fn new() -> Self {
        Self {
            score: 0,
            health: MAX_HEALTH,
            weapon: WeaponType::Normal,
            ammo: MAX_AMMO,
            inventory: Vec::new(),
            letters: LetterCollection::default(),
            tutorial_messages: TutorialMessageState::default(),
        }
    }

    //--- Score ------------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds to the score, saturating at [`MAX_SCORE`].
    pub fn give_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount).min(MAX_SCORE);
    }

    //--- Health -----------------------------------------------------------

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_at_full_health(&self) -> bool {
        self.health >= MAX_HEALTH
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn give_health(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, MAX_HEALTH);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
    }

    //--- Weapons ----------------------------------------------------------

    pub fn weapon(&self) -> WeaponType {
        self.weapon
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn current_max_ammo(&self) -> u32 {
        match self.weapon {
            WeaponType::FlameThrower => MAX_AMMO_FLAME_THROWER,
            _ => MAX_AMMO,
        }
    }

    /// Switches weapon and refills the ammo for it.
    pub fn switch_to_weapon(&mut self, weapon: WeaponType) {
        self.weapon = weapon;
        self.ammo = self.current_max_ammo();
    }

    /// Consumes one shot. The normal weapon has unlimited ammo; running
    /// dry on any other weapon falls back to it.
    pub fn use_ammo(&mut self) {
        if self.weapon == WeaponType::Normal {
            return;
        }

        self.ammo = self.ammo.saturating_sub(1);
        if self.ammo == 0 {
            self.switch_to_weapon(WeaponType::Normal);
        }
    }

    //--- Inventory --------------------------------------------------------

    pub fn inventory(&self) -> &[InventoryItemType] {
        &self.inventory
    }

    pub fn has_item(&self, item: InventoryItemType) -> bool {
        self.inventory.contains(&item)
    }

    pub fn give_item(&mut self, item: InventoryItemType) {
        self.inventory.push(item);
    }

    /// Removes one instance of `item`. Returns `false` if none was held.
    pub fn remove_item(&mut self, item: InventoryItemType) -> bool {
        match self.inventory.iter().position(|i| *i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    //--- Letters & Tutorials ----------------------------------------------

    pub fn add_collected_letter(&mut self, letter: CollectableLetterType) -> LetterCollectionState {
        self.letters.add(letter)
    }

    pub fn letters(&self) -> &LetterCollection {
        &self.letters
    }

    pub fn tutorial_messages(&self) -> &TutorialMessageState {
        &self.tutorial_messages
    }

    pub fn tutorial_messages_mut(&mut self) -> &mut TutorialMessageState {
        &mut self.tutorial_messages
    }

    //--- Level Lifecycle --------------------------------------------------

    /// Prepares the model for entering a new level.
    ///
    /// Health is restored, level-bound items are dropped and the letter
    /// sequence starts over. Score, weapon and tutorial state carry over.
    pub fn reset_for_new_level(&mut self) {
        self.health = MAX_HEALTH;
        self.inventory.retain(|item| !item.is_level_bound());
        self.letters.clear();
    }
}

//=========================================================================
// Tests
//=========================================================================
