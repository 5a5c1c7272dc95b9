//! Difficulty modes and the tuning knobs that vary between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    NO_TROUBLE_MILD, NO_TROUBLE_MILD_EASY, NO_TROUBLE_TOUGH, NO_TROUBLE_TOUGH_EASY, SWORD_ITEM,
};

/// Difficulty selected at startup via its single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Easy,
    #[default]
    Normal,
    Hard,
    Samurai,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode code '{0}' (expected e, n, h or s)")]
pub struct ParseModeError(String);

impl GameMode {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Easy => "e",
            Self::Normal => "n",
            Self::Hard => "h",
            Self::Samurai => "s",
        }
    }

    /// The full knob set for this mode. Every value that historically
    /// differed between difficulty variants lives here, so the rest of the
    /// game is mode-agnostic.
    #[must_use]
    pub const fn config(self) -> ModeConfig {
        match self {
            Self::Easy => ModeConfig {
                markdown: 1.0,
                toughness: 0.2,
                combat_bonus_item: None,
                keep_items_on_cross: true,
                stocks_sword: false,
                no_trouble_tough: NO_TROUBLE_TOUGH_EASY,
                no_trouble_mild: NO_TROUBLE_MILD_EASY,
            },
            Self::Normal => ModeConfig {
                markdown: 0.5,
                toughness: 0.4,
                combat_bonus_item: None,
                keep_items_on_cross: false,
                stocks_sword: false,
                no_trouble_tough: NO_TROUBLE_TOUGH,
                no_trouble_mild: NO_TROUBLE_MILD,
            },
            Self::Hard => ModeConfig {
                markdown: 0.25,
                toughness: 0.75,
                combat_bonus_item: None,
                keep_items_on_cross: false,
                stocks_sword: false,
                no_trouble_tough: NO_TROUBLE_TOUGH,
                no_trouble_mild: NO_TROUBLE_MILD,
            },
            Self::Samurai => ModeConfig {
                markdown: 0.5,
                toughness: 0.4,
                combat_bonus_item: Some(SWORD_ITEM),
                keep_items_on_cross: false,
                stocks_sword: true,
                no_trouble_tough: NO_TROUBLE_TOUGH,
                no_trouble_mild: NO_TROUBLE_MILD,
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(Self::Easy),
            "n" => Ok(Self::Normal),
            "h" => Ok(Self::Hard),
            "s" => Ok(Self::Samurai),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Tuning for one difficulty mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeConfig {
    /// Sell-back multiplier applied to shop buy prices, in (0, 1].
    pub markdown: f64,
    /// Probability that a newly generated town is tough.
    pub toughness: f64,
    /// Kit item that shifts brawl odds when held.
    pub combat_bonus_item: Option<&'static str>,
    /// Crossing items never break in this mode.
    pub keep_items_on_cross: bool,
    /// Whether the shop stocks the sword.
    pub stocks_sword: bool,
    no_trouble_tough: f64,
    no_trouble_mild: f64,
}

impl ModeConfig {
    /// Probability that looking for trouble finds none.
    #[must_use]
    pub const fn no_trouble_chance(&self, tough_town: bool) -> f64 {
        if tough_town {
            self.no_trouble_tough
        } else {
            self.no_trouble_mild
        }
    }
}
