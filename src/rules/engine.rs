//! Rules engine trait.
//!
//! A rules engine is a pure turn-transition function over `GameState`:
//! - `step`: compute the next state and the events it produced
//! - `is_terminal`: the result once the game has ended
//!
//! War involves no player decisions, so there is no action selection; the
//! default `play` loop just steps until the game ends.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameState, PlayerId};
use crate::events::{EventListener, WarEvent};

/// Events produced by one transition. Most turns emit fewer than eight.
pub type EventBatch = SmallVec<[WarEvent; 8]>;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single player holding the most cards.
    Winner(PlayerId),
    /// Draw (nobody holds a card).
    Draw,
    /// Several players tied for the most cards.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the result from final hand sizes, in seat order.
    #[must_use]
    pub fn from_hand_sizes(sizes: &[usize]) -> Self {
        let most = sizes.iter().copied().max().unwrap_or(0);
        if most == 0 {
            return GameResult::Draw;
        }

        let leaders: Vec<PlayerId> = sizes
            .iter()
            .enumerate()
            .filter(|(_, &n)| n == most)
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect();

        match leaders.as_slice() {
            [single] => GameResult::Winner(*single),
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Output of one transition.
#[derive(Clone, Debug)]
pub struct Transition {
    /// State after the transition.
    pub state: GameState,
    /// Events emitted, in order.
    pub events: EventBatch,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `step` must not mutate its input and must be deterministic given the
///   state (all randomness is spent when the deck is shuffled)
/// - `step` on a finished state returns it unchanged with no events
/// - every non-final step must make progress towards termination
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Compute one turn.
    fn step(&self, state: &GameState) -> Transition;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Run one turn in place, returning its events.
    fn apply(&self, state: &mut GameState) -> EventBatch {
        let Transition { state: next, events } = self.step(state);
        *state = next;
        events
    }

    /// Run the game to completion, notifying `listener` of every event.
    fn play(&self, state: &mut GameState, listener: &mut dyn EventListener) -> GameResult {
        loop {
            if let Some(result) = self.is_terminal(state) {
                return result;
            }
            for event in self.apply(state) {
                listener.on_event(state, &event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));

        let team = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(team.is_winner(PlayerId::new(0)));
        assert!(!team.is_winner(PlayerId::new(1)));
        assert!(team.is_winner(PlayerId::new(2)));
    }

    #[test]
    fn test_result_from_hand_sizes() {
        assert_eq!(GameResult::from_hand_sizes(&[3, 7, 2]), GameResult::Winner(PlayerId::new(1)));
        assert_eq!(
            GameResult::from_hand_sizes(&[5, 1, 5]),
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)])
        );
        assert_eq!(GameResult::from_hand_sizes(&[0, 0]), GameResult::Draw);
        assert_eq!(GameResult::from_hand_sizes(&[]), GameResult::Draw);
    }
}
