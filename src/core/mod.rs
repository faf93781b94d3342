//! Core engine types: players, state, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{ConfigError, DeckError, StateError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
