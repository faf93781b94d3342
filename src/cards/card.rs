//! Card values: suit, rank and a stable identity.
//!
//! Two cards with the same suit and rank are only "the same card" if they
//! share a `CardId`. Hand membership checks go through the id, never through
//! suit/rank equality.

use serde::{Deserialize, Serialize};

/// Card suit, in deck-generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in generation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        };
        f.write_str(name)
    }
}

/// Card rank, declared low to high.
///
/// The declaration order is *not* what decides a round: comparisons go
/// through [`RankPolicy`](crate::rules::RankPolicy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in generation order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
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

    /// Short label as printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identity of a physical card.
///
/// For the standard deck this is the card's index in the generated
/// (unshuffled) 52-card sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Physical identity.
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    /// Check if two cards share a rank, regardless of identity.
    #[must_use]
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        let card = Card::new(CardId::new(0), Suit::Hearts, Rank::Ten);
        assert_eq!(format!("{}", card), "10 of Hearts");

        let ace = Card::new(CardId::new(1), Suit::Spades, Rank::Ace);
        assert_eq!(format!("{}", ace), "A of Spades");
    }

    #[test]
    fn test_identity_distinguishes_equal_faces() {
        let a = Card::new(CardId::new(3), Suit::Clubs, Rank::Nine);
        let b = Card::new(CardId::new(40), Suit::Clubs, Rank::Nine);

        assert_ne!(a, b);
        assert!(a.same_rank(&b));
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(51);
        assert_eq!(id.raw(), 51);
        assert_eq!(format!("{}", id), "Card(51)");
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(CardId::new(7), Suit::Diamonds, Rank::Queen);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
