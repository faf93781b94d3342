//! Game state.
//!
//! `GameState` is plain data: deck, pile, seated players, whose turn it is,
//! and whether the game has ended. All mutation happens in
//! [`WarGame`](crate::games::war::WarGame); the state only answers questions
//! about itself.
//!
//! Every collection inside is an `im` persistent structure, so cloning a
//! state to compute the next one is O(1).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{Card, CardId, Deck};
use crate::events::GameOverReason;
use crate::zones::Pile;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Undealt cards.
    pub deck: Deck,

    /// Stakes and pot for the round in progress.
    pub pile: Pile,

    /// Seated players, in turn order.
    pub players: PlayerMap<Player>,

    /// Player who is dealt the next card.
    pub current: PlayerId,

    /// Deals attempted so far (starts at 0).
    pub turn: u32,

    /// Set once the game has ended.
    pub finished: Option<GameOverReason>,

    total_cards: usize,
}

impl GameState {
    /// Create a state with the given deck and an empty hand per name.
    ///
    /// Panics on an empty or oversized name list; validate the
    /// configuration first.
    pub fn new(deck: Deck, player_names: &[String]) -> Self {
        let total_cards = deck.count();
        Self {
            deck,
            pile: Pile::new(),
            players: PlayerMap::new(player_names.len(), |p| {
                Player::new(player_names[p.index()].clone())
            }),
            current: PlayerId::new(0),
            turn: 0,
            finished: None,
            total_cards,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Players holding at least one card, in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.has_cards())
            .map(|(id, _)| id)
            .collect()
    }

    /// Hand size of every player, in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.players.iter().map(|(_, p)| p.hand().len()).collect()
    }

    /// Take a card out of whichever hand holds it.
    pub fn reclaim(&mut self, id: CardId) -> Option<Card> {
        let holder = self
            .players
            .iter()
            .find(|(_, p)| p.has_card(id))
            .map(|(player, _)| player)?;
        self.players[holder].remove_card(id)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Cards the game started with.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently in the deck, all hands and the pot.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|(_, p)| p.hand().len()).sum();
        self.deck.count() + in_hands + self.pile.pot_len()
    }

    /// Check that no card was lost, created or duplicated.
    pub fn audit(&self) -> Result<(), StateError> {
        let found = self.cards_in_play();
        if found != self.total_cards {
            return Err(StateError::CardCountMismatch {
                expected: self.total_cards,
                found,
            });
        }

        let mut seen = FxHashSet::default();
        let hands = self.players.iter().flat_map(|(_, p)| p.hand().iter());
        for card in self.deck.iter().chain(hands).chain(self.pile.pot()) {
            if !seen.insert(card.id) {
                return Err(StateError::DuplicateCard(card.id));
            }
        }
        Ok(())
    }
}
