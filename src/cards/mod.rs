//! Cards and the draw deck.
//!
//! - `Card`: immutable (suit, rank) value with a stable `CardId`
//! - `Deck`: ordered draw pile, shuffled once per game

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{Deck, STANDARD_DECK_SIZE};
