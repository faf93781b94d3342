//! # war-engine
//!
//! A rules engine for the card game War.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `RulesEngine::step` takes a `GameState` and
//!    returns the next one plus the events it produced. Nothing else is
//!    mutated, so any turn can be replayed or inspected in isolation.
//!
//! 2. **Observers, not output**: the engine never prints. Deals, wars,
//!    awards and termination are reported as `WarEvent`s to an
//!    `EventListener`.
//!
//! 3. **Reproducible when asked**: shuffling takes a seedable `GameRng`;
//!    without a seed the system entropy source is used.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   `step` can copy the state it is given.
//!
//! - **Card identity**: every card carries a `CardId`. Hand membership is
//!   decided by id, never by suit/rank equality.
//!
//! - **Card conservation**: deck + hands + pot always holds every card the
//!   game started with. `GameState::audit` checks it.
//!
//! ## Modules
//!
//! - `core`: players, state, RNG, configuration, errors
//! - `cards`: cards and the deck
//! - `zones`: hands and the pile
//! - `rules`: rank policy, `RulesEngine`, `GameResult`
//! - `events`: event types and listeners
//! - `games`: the War implementation
//!
//! ## Example
//!
//! ```
//! use war_engine::{GameConfig, RecordingListener, RulesEngine, WarGameBuilder};
//!
//! let config = GameConfig::new(["Player 1", "Player 2", "Player 3"]).with_seed(7);
//! let (game, mut state) = WarGameBuilder::new(config).build().unwrap();
//!
//! let mut transcript = RecordingListener::new();
//! let _result = game.play(&mut state, &mut transcript);
//!
//! assert!(state.is_finished());
//! assert!(state.audit().is_ok());
//! ```

pub mod cards;
pub mod core;
pub mod events;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DeckError, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap,
    StateError,
};

pub use crate::cards::{Card, CardId, Deck, Rank, Suit, STANDARD_DECK_SIZE};

pub use crate::zones::{Hand, Pile};

pub use crate::rules::{EventBatch, GameResult, RankPolicy, RulesEngine, Transition};

pub use crate::events::{
    EventListener, GameOverReason, LogListener, RecordingListener, Showdown, WarEvent,
};

pub use crate::games::war::{WarGame, WarGameBuilder, WAR_EXTRA_CARDS};
