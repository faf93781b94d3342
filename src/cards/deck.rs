//! The draw deck.
//!
//! Backed by an `im::Vector` so that a `GameState` holding the deck clones
//! in O(1). The deck only ever shrinks after construction.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit};
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Ordered sequence of cards, dealt from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Wrap an existing card sequence, preserving its order.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The 52-card standard deck, suit-major, unshuffled.
    ///
    /// Card ids are the positions in this sequence.
    ///
    /// ```
    /// use war_engine::cards::{Deck, Rank, Suit};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.count(), 52);
    /// let first = deck.peek().unwrap();
    /// assert_eq!((first.suit, first.rank), (Suit::Spades, Rank::Two));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vector::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = CardId::new(cards.len() as u16);
                cards.push_back(Card::new(id, suit, rank));
            }
        }
        Self { cards }
    }

    /// Remaining card count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look at the front card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate over remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return the front card.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Fisher-Yates shuffle in place.
    ///
    /// Walks from the back; each step swaps with a uniform index in
    /// `0..=n`, inclusive of the current position.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut n = self.cards.len();
        while n > 1 {
            n -= 1;
            let k = rng.gen_index_inclusive(n);
            self.cards.swap(k, n);
        }
    }

    /// Shuffle with a freshly seeded system RNG.
    pub fn shuffle_fresh(&mut self) {
        self.shuffle(&mut GameRng::from_entropy());
    }
}
