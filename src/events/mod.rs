//! Event notifications.
//!
//! ## Key Components
//!
//! - [`WarEvent`]: one observable step (deal, war, play, award, game over)
//! - [`EventListener`]: sink for events; closures implement it
//! - [`LogListener`], [`RecordingListener`]: stock sinks
//!
//! ```
//! use war_engine::cards::Deck;
//! use war_engine::core::GameState;
//! use war_engine::events::{EventListener, GameOverReason, WarEvent};
//!
//! let state = GameState::new(Deck::standard(), &["Ann".to_string()]);
//! let mut lines = Vec::new();
//! let mut listener = |state: &GameState, event: &WarEvent| lines.push(event.describe(state));
//! listener.on_event(&state, &WarEvent::GameOver { reason: GameOverReason::DeckEmpty });
//!
//! assert_eq!(lines, vec!["The deck is empty."]);
//! ```

mod event;
mod listener;

pub use event::{GameOverReason, Showdown, WarEvent};
pub use listener::{EventListener, LogListener, RecordingListener};
