//! Game events.
//!
//! Every observable thing the engine does is reported as a `WarEvent`.
//! Events carry ids, not names; `describe` renders the human-readable
//! notification for a given state.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A deal was attempted with no cards left.
    DeckEmpty,
}

/// Which resolution lacked players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Showdown {
    /// Ordinary round resolution.
    Round,
    /// War showdown.
    War,
}

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarEvent {
    /// A card moved from the deck to a player's hand.
    Dealt { player: PlayerId, card: Card },

    /// The dealt card tied every card in the pile.
    WarDeclared { player: PlayerId, card: Card },

    /// A player surrendered their front card to the pot.
    Played { player: PlayerId, card: Card },

    /// A round was settled; `cards` counts the played and staked cards won.
    RoundWon { player: PlayerId, cards: usize },

    /// A war showdown was settled; `cards` counts the played and staked cards won.
    WarWon { player: PlayerId, cards: usize },

    /// Fewer than two players held cards, so nothing was played.
    NotEnoughPlayers { showdown: Showdown, active: usize },

    /// The game ended.
    GameOver { reason: GameOverReason },
}

impl WarEvent {
    /// Player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            WarEvent::Dealt { player, .. }
            | WarEvent::WarDeclared { player, .. }
            | WarEvent::Played { player, .. }
            | WarEvent::RoundWon { player, .. }
            | WarEvent::WarWon { player, .. } => Some(*player),
            WarEvent::NotEnoughPlayers { .. } | WarEvent::GameOver { .. } => None,
        }
    }

    /// Human-readable notification, using player names from `state`.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> String {
        let name = |p: &PlayerId| state.player(*p).name().to_string();
        match self {
            WarEvent::Dealt { player, card } => format!("{} dealt {}.", name(player), card),
            WarEvent::WarDeclared { .. } => "War!".to_string(),
            WarEvent::Played { player, card } => format!("{} played {}.", name(player), card),
            WarEvent::RoundWon { player, .. } => format!("{} won the round.", name(player)),
            WarEvent::WarWon { player, .. } => format!("{} won the war.", name(player)),
            WarEvent::NotEnoughPlayers { showdown: Showdown::Round, .. } => {
                "There are not enough players to settle the round.".to_string()
            }
            WarEvent::NotEnoughPlayers { showdown: Showdown::War, .. } => {
                "There are not enough players to continue the war.".to_string()
            }
            WarEvent::GameOver { reason: GameOverReason::DeckEmpty } => {
                "The deck is empty.".to_string()
            }
        }
    }
}
