//! The town shop: a fixed price table with a mode-dependent sell-back markdown.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SELL_PRICE, PRICE_TABLE, SWORD_ITEM, SWORD_PRICE};
use crate::hunter::{Container, Hunter};
use crate::mode::ModeConfig;

/// Whether the hunter walked in to buy or to sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopIntent {
    Buy,
    Sell,
}

/// Result of a single shop transaction. Failures carry enough context for
/// a narrative line; none of them mutate the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopOutcome {
    Bought { price: i32 },
    Sold { price: i32 },
    UnknownItem,
    AlreadyOwned,
    NotOwned,
    InsufficientGold { price: i32 },
    KitFull,
}

/// Stateless storefront. The price table is immutable; only the markdown
/// factor and the sword listing vary with the mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shop {
    markdown: f64,
    stocks_sword: bool,
}

impl Shop {
    #[must_use]
    pub const fn new(cfg: &ModeConfig) -> Self {
        Self {
            markdown: cfg.markdown,
            stocks_sword: cfg.stocks_sword,
        }
    }

    /// Buy price for an item, if the shop stocks it.
    #[must_use]
    pub fn buy_price(&self, item: &str) -> Option<i32> {
        if self.stocks_sword && item == SWORD_ITEM {
            return Some(SWORD_PRICE);
        }
        PRICE_TABLE
            .iter()
            .find(|(name, _)| *name == item)
            .map(|&(_, price)| price)
    }

    /// Sell-back price: `floor(buy_price * markdown)`, never below 1 for a
    /// stocked item.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sell_price(&self, item: &str) -> Option<i32> {
        self.buy_price(item)
            .map(|price| ((f64::from(price) * self.markdown).floor() as i32).max(MIN_SELL_PRICE))
    }

    /// Everything on the shelves with its buy price, menu order.
    #[must_use]
    pub fn wares(&self) -> Vec<(&'static str, i32)> {
        let mut listed: Vec<(&'static str, i32)> = PRICE_TABLE.to_vec();
        if self.stocks_sword {
            listed.push((SWORD_ITEM, SWORD_PRICE));
        }
        listed
    }

    pub fn buy(&self, hunter: &mut Hunter, item: &str) -> ShopOutcome {
        let Some(price) = self.buy_price(item) else {
            return ShopOutcome::UnknownItem;
        };
        if hunter.has_item(item, Container::Kit) {
            return ShopOutcome::AlreadyOwned;
        }
        if hunter.gold() < price {
            return ShopOutcome::InsufficientGold { price };
        }
        if hunter.kit().is_full() {
            return ShopOutcome::KitFull;
        }
        let bought = hunter.buy_item(item, price);
        debug_assert!(bought);
        ShopOutcome::Bought { price }
    }

    pub fn sell(&self, hunter: &mut Hunter, item: &str) -> ShopOutcome {
        let Some(price) = self.sell_price(item) else {
            return ShopOutcome::UnknownItem;
        };
        if !hunter.has_item(item, Container::Kit) {
            return ShopOutcome::NotOwned;
        }
        let sold = hunter.sell_item(item, price);
        debug_assert!(sold);
        ShopOutcome::Sold { price }
    }
}
