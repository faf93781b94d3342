//! Event listeners.
//!
//! The engine never prints. Whoever runs a game passes an `EventListener`
//! and decides what to do with the notifications.

use crate::core::GameState;

use super::event::WarEvent;

/// Receives events in the order they happen.
///
/// `state` is the state right after the transition that emitted the event.
pub trait EventListener {
    fn on_event(&mut self, state: &GameState, event: &WarEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameState, &WarEvent),
{
    fn on_event(&mut self, state: &GameState, event: &WarEvent) {
        self(state, event);
    }
}

/// Forwards every notification to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogListener;

impl EventListener for LogListener {
    fn on_event(&mut self, state: &GameState, event: &WarEvent) {
        log::info!("{}", event.describe(state));
    }
}

/// Keeps a transcript of every event.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    pub events: Vec<WarEvent>,
}

impl RecordingListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count events matching a predicate.
    pub fn count(&self, pred: impl Fn(&WarEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventListener for RecordingListener {
    fn on_event(&mut self, _state: &GameState, event: &WarEvent) {
        self.events.push(event.clone());
    }
}
