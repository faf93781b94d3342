//! Game configuration.
//!
//! A game is configured by:
//! - the list of player display names (turn order)
//! - an optional shuffle seed (`None` = system entropy)
//! - the rank comparison policy
//!
//! Nothing here is read from the environment or the command line.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::rules::RankPolicy;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seat order. Not required to be unique.
    pub player_names: Vec<String>,

    /// Shuffle seed. `None` draws a fresh seed from the system.
    pub seed: Option<u64>,

    /// How cards are ranked against each other.
    pub rank_policy: RankPolicy,
}

impl GameConfig {
    /// Create a configuration for the given players with default rules.
    pub fn new<S: Into<String>>(player_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            seed: None,
            rank_policy: RankPolicy::default(),
        }
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rank comparison policy.
    #[must_use]
    pub fn with_rank_policy(mut self, policy: RankPolicy) -> Self {
        self.rank_policy = policy;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Reject configurations the engine cannot seat.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.player_names.len() {
            0 => Err(ConfigError::NoPlayers),
            count if count > 255 => Err(ConfigError::TooManyPlayers { count }),
            _ => Ok(()),
        }
    }
}
