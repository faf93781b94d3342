//! Error types.
//!
//! None of these are fatal during play: `DeckError::Empty` is turned into a
//! game-over transition by the engine, configuration errors are reported
//! before a game starts, and `StateError` only comes out of the audit.

use crate::cards::CardId;

/// Deck draw failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("The deck is empty.")]
    Empty,
}

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one player name is required")]
    NoPlayers,
    #[error("at most 255 players supported, got {count}")]
    TooManyPlayers { count: usize },
}

/// Card accounting failures found by [`GameState::audit`](crate::core::GameState::audit).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("expected {expected} cards in play, found {found}")]
    CardCountMismatch { expected: usize, found: usize },
    #[error("{0} is held in more than one place")]
    DuplicateCard(CardId),
}
