//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index supporting 1-255 players, in turn order.
//!
//! ## PlayerMap
//!
//! Per-player data backed by an `im::Vector` for O(1) clone.
//!
//! ## Player
//!
//! Display name plus hand. Names are labels only; duplicates are allowed.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardId};
use crate::zones::Hand;

/// Player seat, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use war_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access and O(1) clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T: Clone> {
    data: Vector<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T: Clone> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T: Clone> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn add_card_to_hand(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn add_cards_to_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.add_cards(cards);
    }

    /// Remove and return the front card; `None` when the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.play_card()
    }

    /// Remove a specific card, wherever it sits in the hand.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        self.hand.remove_card(id)
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        self.hand.has_cards()
    }

    /// Identity membership: true only for this exact physical card.
    #[must_use]
    pub fn has_card(&self, id: CardId) -> bool {
        self.hand.has_card(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p0), "Player 0");
        assert_eq!(p0.next(3), PlayerId::new(1));
        assert_eq!(p2.next(3), PlayerId::new(0));
        assert_eq!(p0.next(1), p0);
    }

    #[test]
    fn test_player_map_index() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(1)] = 7;
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p.index(), *v)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 7), (2, 20)]);
    }

    #[test]
    fn test_player_map_clone_is_independent() {
        let original: PlayerMap<Player> = PlayerMap::new(2, |p| Player::new(format!("{}", p)));
        let mut copy = original.clone();

        copy[PlayerId::new(0)].add_card_to_hand(Card::new(CardId::new(0), Suit::Spades, Rank::Two));

        assert!(copy[PlayerId::new(0)].has_cards());
        assert!(!original[PlayerId::new(0)].has_cards());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_player_hand_operations() {
        let mut player = Player::new("Alice");
        let seven = Card::new(CardId::new(5), Suit::Spades, Rank::Seven);
        let eight = Card::new(CardId::new(6), Suit::Spades, Rank::Eight);

        assert_eq!(player.name(), "Alice");
        assert!(player.play_card().is_none());

        player.add_card_to_hand(seven);
        player.add_cards_to_hand(vec![eight]);
        assert!(player.has_card(seven.id));
        assert_eq!(player.hand().len(), 2);

        assert_eq!(player.play_card(), Some(seven));
        assert!(!player.has_card(seven.id));
        assert!(player.has_cards());
    }
}
