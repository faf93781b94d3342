//! Rank comparison.
//!
//! Cards are compared by their position in a rank table. A rank missing from
//! the table has position -1: it loses to every listed rank and ties every
//! other missing rank.
//!
//! `RankPolicy::Legacy` lists only `6 7 8 9 10 J Q K A`, so 2 through 5 all
//! tie at the bottom. `RankPolicy::Full` lists every rank.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::{Card, Rank};

const LEGACY_TABLE: [Rank; 9] = [
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Which rank table decides a showdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankPolicy {
    /// Table `6..A`; ranks 2-5 are unranked and tie with each other.
    #[default]
    Legacy,
    /// Table `2..A`.
    Full,
}

impl RankPolicy {
    /// The ordered rank table, lowest first.
    #[must_use]
    pub fn table(self) -> &'static [Rank] {
        match self {
            RankPolicy::Legacy => &LEGACY_TABLE,
            RankPolicy::Full => &Rank::ALL,
        }
    }

    /// Position of `rank` in the table, or -1 if it is not listed.
    #[must_use]
    pub fn position(self, rank: Rank) -> i32 {
        self.table()
            .iter()
            .position(|&r| r == rank)
            .map_or(-1, |i| i as i32)
    }

    /// Compare two cards by table position.
    #[must_use]
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        self.position(a.rank).cmp(&self.position(b.rank))
    }

    /// Index of the highest card, the first one found on ties.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn highest(self, cards: &[Card]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, card) in cards.iter().enumerate() {
            match best {
                Some(b) if self.compare(card, &cards[b]) != Ordering::Greater => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
