//! Capacity-bounded ordered set backing the hunter's containers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered set of item names with a fixed logical capacity.
///
/// Insertion preserves arrival order, rejects duplicates, and fails once
/// the capacity is reached. The inline storage hint matches the largest
/// container in the game, so no satchel ever spills to the heap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satchel {
    items: SmallVec<[String; 5]>,
    cap: usize,
}

impl Satchel {
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: SmallVec::new(),
            cap,
        }
    }

    /// Insert if absent and there is room. Returns whether the item was added.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.contains(item) || self.is_full() {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    /// Remove by value. Returns whether the item was present.
    pub fn remove(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|held| held != item);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates_and_overflow() {
        let mut satchel = Satchel::with_capacity(2);
        assert!(satchel.insert("rope"));
        assert!(!satchel.insert("rope"));
        assert!(satchel.insert("boat"));
        assert!(!satchel.insert("horse"));
        assert_eq!(satchel.len(), 2);
        assert!(satchel.is_full());
    }

    #[test]
    fn remove_by_value() {
        let mut satchel = Satchel::with_capacity(3);
        satchel.insert("rope");
        satchel.insert("boat");
        assert!(satchel.remove("rope"));
        assert!(!satchel.remove("rope"));
        assert!(satchel.contains("boat"));
        assert_eq!(satchel.len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut satchel = Satchel::with_capacity(3);
        satchel.insert("water");
        satchel.insert("rope");
        satchel.insert("boots");
        let held: Vec<&str> = satchel.iter().collect();
        assert_eq!(held, ["water", "rope", "boots"]);
    }
}
