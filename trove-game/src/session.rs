//! The game session: one hunter moving through a stream of generated towns.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{PRICE_TABLE, STARTING_GOLD, TEST_PRESET_GOLD, TEST_PRESET_KIT, TREASURES};
use crate::hunter::Hunter;
use crate::mode::{GameMode, ModeConfig};
use crate::shop::ShopIntent;
use crate::town::{LeaveOutcome, Town};

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Won,
    Broke,
    Quit,
}

/// A parsed menu command. Shop commands carry the item the player named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Buy(String),
    Sell(String),
    Move,
    LookForTrouble,
    HuntForTreasure,
    Dig,
    Quit,
}

/// What the controller has to say after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Farewell news from a town that was left behind this turn, if any.
    pub departed_news: Option<String>,
    /// The current town's latest news.
    pub news: String,
}

/// Owns the hunter, the current town, and the session RNG; applies commands
/// and watches for the three terminal conditions.
pub struct Session {
    hunter: Hunter,
    mode: GameMode,
    cfg: ModeConfig,
    town: Town,
    treasure_target: &'static str,
    ending: Option<Ending>,
    rng: ChaCha20Rng,
}

impl Session {
    #[must_use]
    pub fn new(name: &str, mode: GameMode, seed: u64) -> Self {
        let cfg = mode.config();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let hunter = Hunter::new(name, STARTING_GOLD);
        let treasure_target = draw_treasure(&mut rng);
        let mut town = Town::generate(&cfg, &mut rng);
        town.hunter_arrives(&hunter);
        debug!("session start: mode={mode} seed={seed:#x}");
        Self {
            hunter,
            mode,
            cfg,
            town,
            treasure_target,
            ending: None,
            rng,
        }
    }

    /// Pre-equip the hunter for a non-interactive test run: extra gold up
    /// front, then a gold-neutral purchase of a full kit.
    #[must_use]
    pub fn with_test_kit(mut self) -> Self {
        self.hunter.change_gold(TEST_PRESET_GOLD);
        for item in TEST_PRESET_KIT {
            if let Some(&(_, cost)) = PRICE_TABLE.iter().find(|(name, _)| *name == item) {
                self.hunter.change_gold(cost);
                self.hunter.buy_item(item, cost);
            }
        }
        self
    }

    #[must_use]
    pub const fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    #[must_use]
    pub const fn town(&self) -> &Town {
        &self.town
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// This town's treasure, revealed on a hunt.
    #[must_use]
    pub const fn treasure_target(&self) -> &'static str {
        self.treasure_target
    }

    #[must_use]
    pub const fn ending(&self) -> Option<Ending> {
        self.ending
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Apply one turn. On a successful move the old town's farewell news is
    /// reported alongside the new town's welcome.
    pub fn apply(&mut self, command: &Command) -> TurnReport {
        let mut departed_news = None;
        match command {
            Command::Buy(item) => {
                self.town.enter_shop(&mut self.hunter, ShopIntent::Buy, item);
            }
            Command::Sell(item) => {
                self.town.enter_shop(&mut self.hunter, ShopIntent::Sell, item);
            }
            Command::Move => {
                if let LeaveOutcome::Crossed { .. } =
                    self.town.leave_town(&mut self.hunter, &mut self.rng)
                {
                    departed_news = Some(self.town.latest_news().to_string());
                    self.enter_town();
                }
            }
            Command::LookForTrouble => {
                self.town.look_for_trouble(&mut self.hunter, &mut self.rng);
            }
            Command::HuntForTreasure => {
                self.town
                    .hunt_for_treasure(&mut self.hunter, self.treasure_target);
                if self.hunter.collection().is_full() {
                    self.ending = Some(Ending::Won);
                }
            }
            Command::Dig => {
                self.town.dig_for_gold(&mut self.hunter, &mut self.rng);
            }
            Command::Quit => {
                self.ending = Some(Ending::Quit);
            }
        }
        if self.hunter.is_broke() {
            self.ending = Some(Ending::Broke);
        }
        TurnReport {
            departed_news,
            news: self.town.latest_news().to_string(),
        }
    }

    fn enter_town(&mut self) {
        self.treasure_target = draw_treasure(&mut self.rng);
        let mut town = Town::generate(&self.cfg, &mut self.rng);
        town.hunter_arrives(&self.hunter);
        self.town = town;
        debug!(
            "entered a {} town beyond the {}",
            if self.town.is_tough() { "tough" } else { "mild" },
            self.town.terrain().name()
        );
    }
}

fn draw_treasure(rng: &mut impl Rng) -> &'static str {
    TREASURES[rng.gen_range(0..TREASURES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunter::Container;

    #[test]
    fn a_fresh_session_starts_in_a_welcoming_town() {
        let session = Session::new("pat", GameMode::Normal, 7);
        assert_eq!(session.hunter().gold(), 10);
        assert!(session.hunter().kit().is_empty());
        assert!(session.town().latest_news().contains("Welcome to town, pat."));
        assert!(TREASURES.contains(&session.treasure_target()));
        assert!(!session.is_over());
    }

    #[test]
    fn the_test_kit_is_gold_neutral() {
        let session = Session::new("pat", GameMode::Normal, 7).with_test_kit();
        assert_eq!(session.hunter().gold(), 100);
        assert_eq!(session.hunter().kit().len(), 5);
        for item in TEST_PRESET_KIT {
            assert!(session.hunter().has_item(item, Container::Kit), "{item}");
        }
    }

    #[test]
    fn buying_and_selling_flow_through_the_town_shop() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        let report = session.apply(&Command::Buy("rope".to_string()));
        assert_eq!(session.hunter().gold(), 6);
        assert!(report.news.contains("You bought a rope for 4 gold."));

        let report = session.apply(&Command::Sell("rope".to_string()));
        assert_eq!(session.hunter().gold(), 8);
        assert!(report.news.contains("You sold a rope for 2 gold."));
    }

    #[test]
    fn moving_without_gear_goes_nowhere() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        let target_before = session.treasure_target();
        let report = session.apply(&Command::Move);
        assert!(report.departed_news.is_none());
        assert!(report.news.contains("You can't leave town, pat."));
        assert_eq!(session.treasure_target(), target_before);
    }

    #[test]
    fn a_successful_move_swaps_the_town() {
        // The test kit covers four of the six terrains; pick a seed whose
        // first town is crossable with it.
        let seed = (0..200)
            .find(|&seed| {
                let session = Session::new("pat", GameMode::Normal, seed).with_test_kit();
                session.town().terrain().can_cross(session.hunter())
            })
            .expect("some seed yields a crossable first town");

        let mut session = Session::new("pat", GameMode::Normal, seed).with_test_kit();
        let report = session.apply(&Command::Move);
        let departed = report.departed_news.expect("crossing farewell");
        assert!(departed.contains("to cross the"));
        assert!(report.news.contains("Welcome to town, pat."));
        assert!(!session.town().searched());
        assert!(!session.town().dug());
    }

    #[test]
    fn hunting_twice_in_one_town_is_refused() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        session.apply(&Command::HuntForTreasure);
        let report = session.apply(&Command::HuntForTreasure);
        assert!(report.news.contains("already searched this town"));
    }

    #[test]
    fn the_third_treasure_wins_the_game() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        session.hunter.add_treasure("crown");
        session.hunter.add_treasure("trophy");
        session.treasure_target = "gem";

        let report = session.apply(&Command::HuntForTreasure);
        assert!(report.news.contains("You found a gem!"));
        assert_eq!(session.ending(), Some(Ending::Won));
    }

    #[test]
    fn dust_never_wins_the_game() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        session.hunter.add_treasure("crown");
        session.hunter.add_treasure("trophy");
        session.treasure_target = "dust";

        session.apply(&Command::HuntForTreasure);
        assert_eq!(session.ending(), None);
        assert_eq!(session.hunter().collection().len(), 2);
    }

    #[test]
    fn going_broke_ends_the_session() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        session.hunter.change_gold(-11);
        let report = session.apply(&Command::Buy("water".to_string()));
        assert_eq!(session.ending(), Some(Ending::Broke));
        assert!(report.news.contains("can't afford"));
    }

    #[test]
    fn quitting_ends_the_session() {
        let mut session = Session::new("pat", GameMode::Normal, 7);
        session.apply(&Command::Quit);
        assert_eq!(session.ending(), Some(Ending::Quit));
        assert!(session.is_over());
    }
}
