//=========================================================================
// Game Data
//=========================================================================
//
// Identifiers and fixed tables shared by the game logic and the modes:
// sound ids, weapons, inventory items, story letters, tutorial hints,
// HUD message texts and actor ids.
//
//=========================================================================

//=== Module Declarations =================================================

mod player_model;

//=== Public API ==========================================================

pub use player_model::{
    LetterCollection, LetterCollectionState, PlayerModel, TutorialMessageState,
    MAX_AMMO, MAX_AMMO_FLAME_THROWER, MAX_HEALTH, MAX_SCORE,
};

//=== Sounds ==============================================================

/// Sound effects the core asks the audio backend to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    ItemPickup,
    HealthPickup,
    WeaponPickup,
    LettersCollectedCorrectly,
    MenuSelect,
    NormalShot,
    LaserShot,
    RocketShot,
    FlameThrowerShot,
}

//=== Session Parameters ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

//=== Weapons & Items =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeaponType {
    #[default]
    Normal,
    Laser,
    Rocket,
    FlameThrower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryItemType {
    CircuitBoard,
    BlueKey,
    RapidFire,
    SpecialHintGlobe,
    CloakingDevice,
}

impl InventoryItemType {
    /// Items that only make sense inside the level they were found in.
    pub fn is_level_bound(self) -> bool {
        matches!(self, Self::CircuitBoard | Self::BlueKey)
    }
}

//=== Story Letters =======================================================

/// Bonus letters hidden in every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectableLetterType {
    N,
    U,
    K,
    E,
    M,
}

impl CollectableLetterType {
    /// Canonical collection order.
    pub const SEQUENCE: [Self; 5] = [Self::N, Self::U, Self::K, Self::E, Self::M];

    /// The letter that follows this one in the canonical order.
    pub fn successor(self) -> Option<Self> {
        let index = Self::SEQUENCE.iter().position(|&l| l == self)?;
        Self::SEQUENCE.get(index + 1).copied()
    }
}

//=== Tutorial Hints ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorialMessageId {
    FoundTeleporter,
    FoundForceField,
    AccessCardNeeded,
    LettersCollectedRightOrder,
    FoundRapidFire,
    FoundHealthMolecule,
    FoundCircuitBoard,
    FoundBlueKey,
    FoundCloakingDevice,
}

impl TutorialMessageId {
    pub fn text(self) -> &'static str {
        match self {
            Self::FoundTeleporter => "PRESS UP TO USE THE TELEPORTER.",
            Self::FoundForceField => "AN ACCESS CARD WILL SHUT DOWN THIS FORCE FIELD.",
            Self::AccessCardNeeded => "YOU NEED AN ACCESS CARD FOR THIS READER.",
            Self::LettersCollectedRightOrder => {
                "ALL LETTERS IN THE RIGHT ORDER SO FAR! 100,000 POINTS."
            }
            Self::FoundRapidFire => "RAPID FIRE! HOLD DOWN THE FIRE BUTTON.",
            Self::FoundHealthMolecule => "HEALTH MOLECULES RESTORE ONE POINT OF HEALTH.",
            Self::FoundCircuitBoard => "USE THE CIRCUIT BOARD ON A CARD READER.",
            Self::FoundBlueKey => "THE BLUE KEY OPENS A KEYHOLE.",
            Self::FoundCloakingDevice => "THE CLOAKING DEVICE MAKES YOU INVISIBLE.",
        }
    }
}

//=== HUD Messages ========================================================

pub mod messages {
    pub const ACCESS_GRANTED: &str = "ACCESS GRANTED.";
    pub const FOUND_SPECIAL_HINT_GLOBE: &str =
        "YOU FOUND A SPECIAL HINT GLOBE! BRING IT TO A HINT MACHINE.";
    pub const LETTERS_COLLECTED_WRONG_ORDER: &str =
        "LETTERS OUT OF ORDER... 10,000 POINT BONUS.";
}

//=== Actor IDs ===========================================================

/// Identifies an actor type in level files and sprite sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u16);

impl ActorId {
    pub const PLAYER_SPAWN: Self = Self(1);

    //--- Interactables ----------------------------------------------------
    pub const TELEPORTER: Self = Self(10);
    pub const CARD_READER: Self = Self(11);
    pub const FORCE_FIELD: Self = Self(12);
    pub const LEVEL_EXIT: Self = Self(13);

    //--- Collectables -----------------------------------------------------
    pub const SODA_CAN: Self = Self(20);
    pub const HEALTH_MOLECULE: Self = Self(21);
    pub const RED_GEM: Self = Self(22);
    pub const GREEN_GEM: Self = Self(23);
    pub const LASER_WEAPON: Self = Self(24);
    pub const ROCKET_WEAPON: Self = Self(25);
    pub const FLAME_THROWER_WEAPON: Self = Self(26);
    pub const RAPID_FIRE: Self = Self(27);
    pub const CIRCUIT_BOARD: Self = Self(28);
    pub const BLUE_KEY: Self = Self(29);
    pub const SPECIAL_HINT_GLOBE: Self = Self(30);
    pub const CLOAKING_DEVICE: Self = Self(31);

    pub const LETTER_N: Self = Self(40);
    pub const LETTER_U: Self = Self(41);
    pub const LETTER_K: Self = Self(42);
    pub const LETTER_E: Self = Self(43);
    pub const LETTER_M: Self = Self(44);

    //--- Effects ----------------------------------------------------------
    pub const SCORE_NUMBER_100: Self = Self(60);
    pub const SCORE_NUMBER_200: Self = Self(61);
    pub const SCORE_NUMBER_500: Self = Self(62);
    pub const SCORE_NUMBER_1000: Self = Self(63);
    pub const SCORE_NUMBER_2000: Self = Self(64);
    pub const SCORE_NUMBER_5000: Self = Self(65);
    pub const SCORE_NUMBER_10000: Self = Self(66);

    //--- Projectiles ------------------------------------------------------
    pub const NORMAL_SHOT: Self = Self(80);
    pub const LASER_SHOT: Self = Self(81);
    pub const ROCKET: Self = Self(82);
    pub const FLAME: Self = Self(83);

    //--- UI ---------------------------------------------------------------
    pub const HUD_SHEET: Self = Self(90);
    pub const PLAYER: Self = Self(91);
}

//=========================================================================
// Tests
//=========================================================================
