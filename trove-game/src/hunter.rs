//! The hunter's ledger: gold balance and bounded item containers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COLLECTION_CAPACITY, KIT_CAPACITY, TREASURE_SENTINEL};
use crate::satchel::Satchel;

/// Which of the hunter's two containers a membership test targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    Kit,
    Collection,
}

/// The player character: a name, a gold balance, and two bounded containers.
///
/// `broke` latches the first time the balance goes negative and is never
/// cleared, no matter how much gold arrives later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Satchel,
    collection: Satchel,
    broke: bool,
}

impl Hunter {
    #[must_use]
    pub fn new(name: &str, starting_gold: i32) -> Self {
        Self {
            name: name.to_string(),
            gold: starting_gold,
            kit: Satchel::with_capacity(KIT_CAPACITY),
            collection: Satchel::with_capacity(COLLECTION_CAPACITY),
            broke: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn gold(&self) -> i32 {
        self.gold
    }

    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.broke
    }

    #[must_use]
    pub const fn kit(&self) -> &Satchel {
        &self.kit
    }

    #[must_use]
    pub const fn collection(&self) -> &Satchel {
        &self.collection
    }

    /// Adjust the balance. A negative result latches `broke` permanently.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold += delta;
        if self.gold < 0 {
            self.broke = true;
        }
    }

    /// Debit `cost` and add `item` to the kit.
    ///
    /// Rejected without side effects when the cost is zero, the balance is
    /// short, the item is already held, or the kit is full.
    pub fn buy_item(&mut self, item: &str, cost: i32) -> bool {
        if cost == 0 || self.gold < cost || self.kit.contains(item) || self.kit.is_full() {
            return false;
        }
        self.gold -= cost;
        let added = self.kit.insert(item);
        debug_assert!(added);
        added
    }

    /// Credit `price` and remove `item` from the kit.
    ///
    /// Rejected without side effects when the price is non-positive or the
    /// item is not held.
    pub fn sell_item(&mut self, item: &str, price: i32) -> bool {
        if price <= 0 || !self.kit.contains(item) {
            return false;
        }
        self.gold += price;
        self.kit.remove(item)
    }

    /// Remove an item from the kit outright, e.g. when it breaks on a
    /// crossing. Returns whether the item was held.
    pub fn drop_item(&mut self, item: &str) -> bool {
        self.kit.remove(item)
    }

    /// Add a find to the collection.
    ///
    /// Returns false only for the worthless "dust" sentinel. Duplicate or
    /// over-capacity finds are silently ignored; callers that care check
    /// membership first.
    pub fn add_treasure(&mut self, treasure: &str) -> bool {
        if treasure == TREASURE_SENTINEL {
            return false;
        }
        self.collection.insert(treasure);
        true
    }

    #[must_use]
    pub fn has_item(&self, item: &str, container: Container) -> bool {
        match container {
            Container::Kit => self.kit.contains(item),
            Container::Collection => self.collection.contains(item),
        }
    }

    fn list(satchel: &Satchel) -> String {
        satchel.iter().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if !self.kit.is_empty() {
            write!(f, " and {}", Self::list(&self.kit))?;
        }
        write!(f, "\nTreasures found:")?;
        if self.collection.is_empty() {
            write!(f, " none")
        } else {
            write!(f, " a {}", Self::list(&self.collection))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_debits_once_and_rejects_rebuy() {
        let mut hunter = Hunter::new("pat", 10);
        assert!(hunter.buy_item("rope", 4));
        assert_eq!(hunter.gold(), 6);
        assert!(hunter.has_item("rope", Container::Kit));

        assert!(!hunter.buy_item("rope", 4));
        assert_eq!(hunter.gold(), 6);
    }

    #[test]
    fn buy_rejects_zero_cost_and_short_balance() {
        let mut hunter = Hunter::new("pat", 3);
        assert!(!hunter.buy_item("water", 0));
        assert!(!hunter.buy_item("horse", 12));
        assert_eq!(hunter.gold(), 3);
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn kit_never_exceeds_capacity() {
        let mut hunter = Hunter::new("pat", 1_000);
        for item in ["water", "rope", "boots", "machete", "shovel", "horse", "boat"] {
            hunter.buy_item(item, 1);
        }
        assert_eq!(hunter.kit().len(), 5);
        assert!(!hunter.has_item("horse", Container::Kit));
        assert!(!hunter.has_item("boat", Container::Kit));
    }

    #[test]
    fn sell_rejects_unowned_and_worthless() {
        let mut hunter = Hunter::new("pat", 10);
        hunter.buy_item("rope", 4);
        assert!(!hunter.sell_item("boat", 10));
        assert!(!hunter.sell_item("rope", 0));
        assert!(hunter.sell_item("rope", 2));
        assert_eq!(hunter.gold(), 8);
        assert!(!hunter.has_item("rope", Container::Kit));
    }

    #[test]
    fn broke_latches_permanently() {
        let mut hunter = Hunter::new("pat", 3);
        hunter.change_gold(-5);
        assert_eq!(hunter.gold(), -2);
        assert!(hunter.is_broke());

        hunter.change_gold(100);
        assert_eq!(hunter.gold(), 98);
        assert!(hunter.is_broke());
    }

    #[test]
    fn dust_never_joins_the_collection() {
        let mut hunter = Hunter::new("pat", 10);
        assert!(!hunter.add_treasure("dust"));
        assert!(hunter.collection().is_empty());

        assert!(hunter.add_treasure("crown"));
        assert!(hunter.add_treasure("crown"));
        assert_eq!(hunter.collection().len(), 1);
    }

    #[test]
    fn status_line_mentions_gold_and_items() {
        let mut hunter = Hunter::new("pat", 10);
        assert!(hunter.to_string().contains("Treasures found: none"));
        hunter.buy_item("rope", 4);
        hunter.add_treasure("gem");
        let status = hunter.to_string();
        assert!(status.contains("pat has 6 gold and rope"));
        assert!(status.contains("Treasures found: a gem"));
    }
}
