//! Card zones outside the deck.
//!
//! - `Hand`: a player's cards, played front-first
//! - `Pile`: revealed stakes and the surrendered pot for the current round

mod hand;
mod pile;

pub use hand::Hand;
pub use pile::Pile;
