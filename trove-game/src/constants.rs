//! Centralized balance and tuning constants for Trove game logic.
//!
//! Keeping every tuning number together ensures gameplay can only be
//! adjusted via code changes reviewed in version control, never through
//! scattered magic literals.

// Hunter -------------------------------------------------------------------
pub(crate) const STARTING_GOLD: i32 = 10;
pub(crate) const KIT_CAPACITY: usize = 5;
pub(crate) const COLLECTION_CAPACITY: usize = 3;

// Treasure hunt ------------------------------------------------------------
pub(crate) const TREASURES: [&str; 4] = ["crown", "trophy", "gem", "dust"];
pub(crate) const TREASURE_SENTINEL: &str = "dust";

// Shop ---------------------------------------------------------------------
pub(crate) const PRICE_TABLE: [(&str, i32); 7] = [
    ("water", 2),
    ("rope", 4),
    ("boots", 6),
    ("machete", 6),
    ("shovel", 8),
    ("horse", 12),
    ("boat", 20),
];
pub(crate) const SWORD_ITEM: &str = "sword";
pub(crate) const SWORD_PRICE: i32 = 25;
pub(crate) const MIN_SELL_PRICE: i32 = 1;

// Crossings ----------------------------------------------------------------
pub(crate) const ITEM_BREAK_CHANCE: f64 = 0.5;

// Brawls -------------------------------------------------------------------
pub(crate) const BRAWL_STAKES_MAX: i32 = 10;
pub(crate) const NO_TROUBLE_TOUGH_EASY: f64 = 0.4;
pub(crate) const NO_TROUBLE_TOUGH: f64 = 0.66;
pub(crate) const NO_TROUBLE_MILD_EASY: f64 = 0.15;
pub(crate) const NO_TROUBLE_MILD: f64 = 0.33;
pub(crate) const ARMED_LOSS_CHANCE: f64 = 0.042;
pub(crate) const STRIKE_BACK_TOUGH: f64 = 0.09;
pub(crate) const STRIKE_BACK_MILD: f64 = 0.06;
pub(crate) const FLEE_THRESHOLD: f64 = 0.042;

// Digging ------------------------------------------------------------------
pub(crate) const DIG_TOOL: &str = "shovel";
pub(crate) const DIG_SUCCESS_CHANCE: f64 = 0.5;
pub(crate) const DIG_GOLD_MAX: i32 = 20;

// Test preset --------------------------------------------------------------
pub(crate) const TEST_PRESET_GOLD: i32 = 90;
pub(crate) const TEST_PRESET_KIT: [&str; 5] = ["water", "rope", "boots", "machete", "shovel"];
