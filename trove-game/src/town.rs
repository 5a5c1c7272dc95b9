//! A town: shop, surrounding terrain, and per-visit narrative state.

use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::constants::{
    ARMED_LOSS_CHANCE, BRAWL_STAKES_MAX, DIG_GOLD_MAX, DIG_SUCCESS_CHANCE, DIG_TOOL,
    FLEE_THRESHOLD, ITEM_BREAK_CHANCE, STRIKE_BACK_MILD, STRIKE_BACK_TOUGH, SWORD_ITEM,
    TREASURE_SENTINEL,
};
use crate::hunter::{Container, Hunter};
use crate::mode::ModeConfig;
use crate::shop::{Shop, ShopIntent, ShopOutcome};
use crate::terrain::Terrain;

/// Result of trying to leave town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveOutcome {
    Crossed {
        item_used: &'static str,
        item_lost: bool,
    },
    Blocked,
}

/// Result of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TroubleOutcome {
    NoTrouble,
    Won { gold: i32 },
    Lost { gold: i32 },
    Fled,
}

/// Result of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigOutcome {
    Gold { amount: i32 },
    Dirt,
    AlreadyDug,
    NoShovel,
}

/// Result of hunting for this town's treasure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { treasure: String },
    Duplicate { treasure: String },
    Dust,
    AlreadySearched,
}

/// One stop on the hunt. Lives from arrival until a successful crossing;
/// the one-shot flags and the latest news die with it.
#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    cfg: ModeConfig,
    tough: bool,
    searched: bool,
    dug: bool,
    latest_news: String,
}

impl Town {
    /// Generate a fresh town: random terrain, toughness rolled against the
    /// mode's base rate.
    pub fn generate(cfg: &ModeConfig, rng: &mut impl Rng) -> Self {
        let terrain = Terrain::random(rng);
        let tough = rng.gen_range(0.0..1.0) < cfg.toughness;
        Self {
            shop: Shop::new(cfg),
            terrain,
            cfg: *cfg,
            tough,
            searched: false,
            dug: false,
            latest_news: String::new(),
        }
    }

    #[must_use]
    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }

    #[must_use]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    #[must_use]
    pub const fn shop(&self) -> &Shop {
        &self.shop
    }

    #[must_use]
    pub const fn is_tough(&self) -> bool {
        self.tough
    }

    #[must_use]
    pub const fn searched(&self) -> bool {
        self.searched
    }

    #[must_use]
    pub const fn dug(&self) -> bool {
        self.dug
    }

    /// Greet an arriving hunter and set the opening news.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let flavor = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        self.latest_news = format!("Welcome to town, {}.\n{flavor}", hunter.name());
    }

    /// Try to cross the surrounding terrain.
    ///
    /// Blocked crossings change nothing and set a message naming the missing
    /// item(s). A successful crossing spends the primary item if held, else
    /// the secondary, then rolls a 50% break. The sword never breaks, and
    /// easy mode keeps everything intact. The caller retires this town once
    /// the hunter has crossed.
    pub fn leave_town(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) -> LeaveOutcome {
        let Some(item) = self.terrain.crossing_item(hunter) else {
            self.latest_news = match self.terrain.secondary_item() {
                Some(alt) => format!(
                    "You can't leave town, {}. You don't have a {} or a {alt}.",
                    hunter.name(),
                    self.terrain.needed_item(),
                ),
                None => format!(
                    "You can't leave town, {}. You don't have a {}.",
                    hunter.name(),
                    self.terrain.needed_item(),
                ),
            };
            return LeaveOutcome::Blocked;
        };

        let mut news = format!("You used your {item} to cross the {}.", self.terrain.name());
        let breaks = rng.gen_range(0.0..1.0) < ITEM_BREAK_CHANCE;
        let item_lost = breaks && !self.cfg.keep_items_on_cross && item != SWORD_ITEM;
        if item_lost {
            hunter.drop_item(item);
            news.push_str(&format!("\nUnfortunately, you lost your {item}."));
        }
        debug!(
            "crossed {} with {item}, lost: {item_lost}",
            self.terrain.name()
        );
        self.latest_news = news;
        LeaveOutcome::Crossed { item_used: item, item_lost }
    }

    /// Pick a fight for 1-10 gold.
    ///
    /// The tougher the town, the easier it is to find a fight and the harder
    /// it is to win one. Holding the mode's combat-bonus item flips the odds
    /// almost entirely in the hunter's favor, save for a rare counter that
    /// guarantees a loss. A loss roll under the flee threshold costs nothing.
    pub fn look_for_trouble(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) -> TroubleOutcome {
        let no_trouble_chance = self.cfg.no_trouble_chance(self.tough);
        if rng.gen_range(0.0..1.0) > no_trouble_chance {
            self.latest_news = "You couldn't find any trouble.".to_string();
            return TroubleOutcome::NoTrouble;
        }

        let mut news = String::from("You want trouble, stranger! You got it!\nOof! Umph! Ow!\n");
        let stakes = rng.gen_range(1..=BRAWL_STAKES_MAX);
        let armed = self
            .cfg
            .combat_bonus_item
            .is_some_and(|item| hunter.has_item(item, Container::Kit));

        let mut loss_threshold = no_trouble_chance;
        if armed {
            loss_threshold = ARMED_LOSS_CHANCE;
            let counter = if self.tough {
                STRIKE_BACK_TOUGH
            } else {
                STRIKE_BACK_MILD
            };
            if rng.gen_range(0.0..1.0) < counter {
                loss_threshold = 1.0;
            }
        }

        let player_strike = rng.gen_range(0.0..1.0);
        let outcome = if player_strike > loss_threshold {
            if armed {
                news.push_str(
                    "Ahh, this stranger has a sword! This guy's for real! \
                     Here, take my gold. I'm outta here!",
                );
                news.push_str(&format!(
                    "\nYou intimidated the brawler and receive {stakes} gold. Nice going."
                ));
            } else {
                news.push_str("Okay, stranger! You proved yer mettle. Here, take my gold.");
                news.push_str(&format!("\nYou won the brawl and receive {stakes} gold."));
            }
            hunter.change_gold(stakes);
            TroubleOutcome::Won { gold: stakes }
        } else if player_strike < FLEE_THRESHOLD {
            if armed {
                news.push_str(
                    "This stranger's got a sword! This guy's not playing fair! \
                     Freeze, don't move or I'll shoot!",
                );
                news.push_str("\nYou fled the scene and they missed their gunshot. You pay nothing.");
            } else {
                news.push_str("That'll teach you to go lookin' fer trouble in MY town!");
                news.push_str("\nYou slipped away before they could shake you down.");
            }
            TroubleOutcome::Fled
        } else {
            if armed {
                news.push_str(
                    "This stranger's got a sword! This guy's not playing fair! \
                     Freeze, don't move or I'll shoot!",
                );
                news.push_str(&format!(
                    "\nYou were held at gunpoint and pay {stakes} gold. Just wow."
                ));
            } else {
                news.push_str("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
                news.push_str(&format!("\nYou lost the brawl and pay {stakes} gold."));
            }
            hunter.change_gold(-stakes);
            TroubleOutcome::Lost { gold: stakes }
        };
        debug!("brawl in {} town: {outcome:?}", if self.tough { "tough" } else { "mild" });
        self.latest_news = news;
        outcome
    }

    /// Dig for buried gold: needs a shovel, once per visit, even odds of
    /// 1-20 gold or plain dirt.
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) -> DigOutcome {
        if self.dug {
            self.latest_news = "You already dug for gold in this town.".to_string();
            return DigOutcome::AlreadyDug;
        }
        if !hunter.has_item(DIG_TOOL, Container::Kit) {
            self.latest_news = "You can't dig for gold without a shovel.".to_string();
            return DigOutcome::NoShovel;
        }
        self.dug = true;
        if rng.gen_range(0.0..1.0) < DIG_SUCCESS_CHANCE {
            let amount = rng.gen_range(1..=DIG_GOLD_MAX);
            hunter.change_gold(amount);
            self.latest_news = format!("You dug up {amount} gold!");
            DigOutcome::Gold { amount }
        } else {
            self.latest_news = "You dug but only found dirt.".to_string();
            DigOutcome::Dirt
        }
    }

    /// Search the town for its treasure, once per visit. Dust is never kept,
    /// and a repeat find of something already collected changes nothing.
    pub fn hunt_for_treasure(&mut self, hunter: &mut Hunter, treasure: &str) -> SearchOutcome {
        if self.searched {
            self.latest_news = "You have already searched this town!".to_string();
            return SearchOutcome::AlreadySearched;
        }
        self.searched = true;

        let mut news = format!("You found a {treasure}!");
        if treasure == TREASURE_SENTINEL {
            news.push_str("\nYou did not add the dust.\nYou want to keep your collection clean.");
            self.latest_news = news;
            return SearchOutcome::Dust;
        }
        if hunter.has_item(treasure, Container::Collection) {
            news.push_str("\nYou already have this treasure!");
            self.latest_news = news;
            return SearchOutcome::Duplicate {
                treasure: treasure.to_string(),
            };
        }
        hunter.add_treasure(treasure);
        self.latest_news = news;
        SearchOutcome::Found {
            treasure: treasure.to_string(),
        }
    }

    /// One shop transaction; always ends with the hunter back outside.
    pub fn enter_shop(&mut self, hunter: &mut Hunter, intent: ShopIntent, item: &str) -> ShopOutcome {
        let outcome = match intent {
            ShopIntent::Buy => self.shop.buy(hunter, item),
            ShopIntent::Sell => self.shop.sell(hunter, item),
        };
        let line = match outcome {
            ShopOutcome::Bought { price } => format!("You bought a {item} for {price} gold."),
            ShopOutcome::Sold { price } => format!("You sold a {item} for {price} gold."),
            ShopOutcome::UnknownItem => format!("We ain't got no {item} around here."),
            ShopOutcome::AlreadyOwned => format!("You already have a {item}."),
            ShopOutcome::NotOwned => format!("You can't sell a {item} you don't have."),
            ShopOutcome::InsufficientGold { price } => {
                format!("You can't afford the {item}; it costs {price} gold.")
            }
            ShopOutcome::KitFull => "Your kit is full.".to_string(),
        };
        self.latest_news = format!("{line}\nYou left the shop.");
        outcome
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}
