//! A player's hand: an ordered queue of cards.
//!
//! Cards are received at the back and played from the front.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Ordered cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append several cards, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the front card, or `None` if the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Remove this exact card wherever it sits in the hand.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Check if any card is held.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Check if this exact card (by identity) is held.
    #[must_use]
    pub fn has_card(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
