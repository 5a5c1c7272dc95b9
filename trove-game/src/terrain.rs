//! Terrain between towns: the crossing rule gating departure.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hunter::{Container, Hunter};

/// One of the six fixed terrain archetypes surrounding a town.
///
/// Each requires a kit item to cross; only the jungle offers an alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    pub const ALL: [Self; 6] = [
        Self::Mountains,
        Self::Ocean,
        Self::Plains,
        Self::Desert,
        Self::Jungle,
        Self::Marsh,
    ];

    /// Draw one archetype uniformly at random.
    #[must_use]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Ocean => "Ocean",
            Self::Plains => "Plains",
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Marsh => "Marsh",
        }
    }

    #[must_use]
    pub const fn needed_item(self) -> &'static str {
        match self {
            Self::Mountains => "rope",
            Self::Ocean => "boat",
            Self::Plains => "horse",
            Self::Desert => "water",
            Self::Jungle => "machete",
            Self::Marsh => "boots",
        }
    }

    #[must_use]
    pub const fn secondary_item(self) -> Option<&'static str> {
        match self {
            Self::Jungle => Some("sword"),
            _ => None,
        }
    }

    /// True iff the hunter's kit holds the primary item, or a secondary
    /// exists and the kit holds that.
    #[must_use]
    pub fn can_cross(self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item(), Container::Kit)
            || self
                .secondary_item()
                .is_some_and(|item| hunter.has_item(item, Container::Kit))
    }

    /// The item a successful crossing would spend: primary preferred.
    #[must_use]
    pub fn crossing_item(self, hunter: &Hunter) -> Option<&'static str> {
        if hunter.has_item(self.needed_item(), Container::Kit) {
            return Some(self.needed_item());
        }
        self.secondary_item()
            .filter(|item| hunter.has_item(item, Container::Kit))
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary_item() {
            Some(alt) => write!(
                f,
                "{} needs a(n) {} or a(n) {alt} to cross.",
                self.name(),
                self.needed_item()
            ),
            None => write!(f, "{} needs a(n) {} to cross.", self.name(), self.needed_item()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_kit_never_crosses() {
        let hunter = Hunter::new("pat", 10);
        for terrain in Terrain::ALL {
            assert!(!terrain.can_cross(&hunter), "{terrain}");
        }
    }

    #[test]
    fn primary_item_crosses() {
        let mut hunter = Hunter::new("pat", 100);
        hunter.buy_item("boat", 20);
        assert!(Terrain::Ocean.can_cross(&hunter));
        assert_eq!(Terrain::Ocean.crossing_item(&hunter), Some("boat"));
        assert!(!Terrain::Plains.can_cross(&hunter));
    }

    #[test]
    fn jungle_accepts_the_sword_but_prefers_the_machete() {
        let mut hunter = Hunter::new("pat", 100);
        hunter.buy_item("sword", 25);
        assert!(Terrain::Jungle.can_cross(&hunter));
        assert_eq!(Terrain::Jungle.crossing_item(&hunter), Some("sword"));

        hunter.buy_item("machete", 6);
        assert_eq!(Terrain::Jungle.crossing_item(&hunter), Some("machete"));
    }

    #[test]
    fn only_the_jungle_offers_a_secondary() {
        let with_secondary: Vec<Terrain> = Terrain::ALL
            .into_iter()
            .filter(|terrain| terrain.secondary_item().is_some())
            .collect();
        assert_eq!(with_secondary, [Terrain::Jungle]);
    }

    #[test]
    fn random_draw_stays_in_the_table() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..64 {
            let terrain = Terrain::random(&mut rng);
            assert!(Terrain::ALL.contains(&terrain));
        }
    }

    #[test]
    fn display_names_required_items() {
        assert_eq!(
            Terrain::Marsh.to_string(),
            "Marsh needs a(n) boots to cross."
        );
        assert_eq!(
            Terrain::Jungle.to_string(),
            "Jungle needs a(n) machete or a(n) sword to cross."
        );
    }
}
