//! Game rules.
//!
//! - `RankPolicy`: how two cards compare
//! - `RulesEngine`: turn-transition trait implemented by games
//! - `GameResult`: outcome once a game ends

pub mod engine;
pub mod ranking;

pub use engine::{EventBatch, GameResult, RulesEngine, Transition};
pub use ranking::RankPolicy;
