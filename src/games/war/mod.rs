//! The card game War.
//!
//! - A shuffled 52-card deck is dealt one card per turn, seats in order
//! - The first card of a round is staked on the pile
//! - A later card that ties every staked rank declares war: its player is
//!   dealt two more cards, then everyone holding cards plays one and the
//!   highest takes every played and staked card
//! - Any other card settles the round the same way
//! - The game ends when a deal finds the deck empty
//!
//! Supports 1-255 players.

mod game;

pub use game::{WarGame, WarGameBuilder, WAR_EXTRA_CARDS};
