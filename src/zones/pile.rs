//! The shared pile contested by a round.
//!
//! The pile has two parts:
//! - **stakes**: every card revealed by a deal since the last award. The war
//!   check compares a new card against these. A staked card stays in its
//!   holder's hand until it is played or awarded.
//! - **pot**: cards actually surrendered from hands (round candidates and
//!   war cards).
//!
//! An award hands over the pot plus every staked card not already in it.
//! A card lives in exactly one of deck, a hand, or the pot. Stakes are a
//! record of what was revealed and are never counted as cards in play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Stakes and pot for the round in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    stakes: Vector<Card>,
    pot: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing has been staked since the last award.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    /// Record a revealed card.
    pub fn stake(&mut self, card: Card) {
        self.stakes.push_back(card);
    }

    /// Revealed cards since the last award, oldest first.
    pub fn stakes(&self) -> impl Iterator<Item = &Card> {
        self.stakes.iter()
    }

    /// Check if `card` ties every staked card.
    ///
    /// All stakes must share the card's rank, not only the latest one. An
    /// empty pile never declares war.
    #[must_use]
    pub fn is_war(&self, card: &Card) -> bool {
        !self.stakes.is_empty() && self.stakes.iter().all(|s| s.same_rank(card))
    }

    /// Put a card surrendered from a hand into the pot.
    pub fn surrender(&mut self, card: Card) {
        self.pot.push_back(card);
    }

    /// Cards in the pot.
    #[must_use]
    pub fn pot_len(&self) -> usize {
        self.pot.len()
    }

    /// Iterate over the pot, oldest first.
    pub fn pot(&self) -> impl Iterator<Item = &Card> {
        self.pot.iter()
    }

    /// Empty the pot, returning its cards oldest first.
    pub fn take_pot(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.pot)
    }

    /// Clear the stakes, returning them oldest first.
    pub fn take_stakes(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.stakes)
    }
}
