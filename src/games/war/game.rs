//! War game implementation.

use crate::cards::{Card, Deck};
use crate::core::{ConfigError, GameConfig, GameRng, GameState, PlayerId};
use crate::events::{GameOverReason, Showdown, WarEvent};
use crate::rules::{EventBatch, GameResult, RulesEngine, Transition};

/// Extra cards dealt to the player who declares war.
pub const WAR_EXTRA_CARDS: usize = 2;

/// The War rules engine.
///
/// Holds only configuration; all game data lives in `GameState`.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: GameConfig,
}

/// Builder for creating a WarGame and its initial state.
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    config: GameConfig,
    deck: Option<Deck>,
}

impl WarGameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self { config, deck: None }
    }

    /// Play with this exact deck, in this order, without shuffling.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game and initial state.
    ///
    /// Without an explicit deck, the standard deck is generated and shuffled
    /// once, from the configured seed or from system entropy.
    pub fn build(self) -> Result<(WarGame, GameState), ConfigError> {
        self.config.validate()?;

        let deck = match self.deck {
            Some(deck) => deck,
            None => {
                let mut rng = match self.config.seed {
                    Some(seed) => GameRng::new(seed),
                    None => GameRng::from_entropy(),
                };
                log::debug!("shuffling standard deck with seed {}", rng.seed());
                let mut deck = Deck::standard();
                deck.shuffle(&mut rng);
                deck
            }
        };

        let state = GameState::new(deck, &self.config.player_names);
        log::info!(
            "seated {} players with {} cards",
            state.player_count(),
            state.total_cards()
        );

        Ok((WarGame { config: self.config }, state))
    }
}

impl WarGame {
    /// Players ordered by hand size, largest first; seat order on ties.
    #[must_use]
    pub fn standings(&self, state: &GameState) -> Vec<(PlayerId, usize)> {
        let mut standings: Vec<_> = state
            .players
            .iter()
            .map(|(id, p)| (id, p.hand().len()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    /// One deal, plus whatever it sets off.
    fn turn(&self, state: &mut GameState, events: &mut EventBatch) {
        state.turn += 1;
        let player = state.current;
        state.current = player.next(state.player_count());

        let Some(card) = self.deal_to(state, player, events) else {
            return;
        };
        log::debug!(
            "turn {}: {} received {}",
            state.turn,
            state.player(player).name(),
            card
        );

        if state.pile.is_empty() {
            state.pile.stake(card);
            return;
        }

        if state.pile.is_war(&card) {
            log::info!("war declared by {} on {}", state.player(player).name(), card.rank);
            events.push(WarEvent::WarDeclared { player, card });
            for _ in 0..WAR_EXTRA_CARDS {
                if self.deal_to(state, player, events).is_none() {
                    return;
                }
            }
            state.pile.stake(card);
            self.showdown(state, Showdown::War, events);
        } else {
            state.pile.stake(card);
            self.showdown(state, Showdown::Round, events);
        }
    }

    /// Move the front deck card to `player`, or end the game.
    fn deal_to(&self, state: &mut GameState, player: PlayerId, events: &mut EventBatch) -> Option<Card> {
        match state.deck.deal_card() {
            Ok(card) => {
                state.players[player].add_card_to_hand(card);
                events.push(WarEvent::Dealt { player, card });
                Some(card)
            }
            Err(err) => {
                log::info!("game over after {} turns: {}", state.turn, err);
                state.finished = Some(GameOverReason::DeckEmpty);
                events.push(WarEvent::GameOver {
                    reason: GameOverReason::DeckEmpty,
                });
                None
            }
        }
    }

    /// Every player holding cards plays their front card; the highest takes
    /// the pot and every staked card.
    ///
    /// With fewer than two such players nothing is played and the pile
    /// carries over.
    fn showdown(&self, state: &mut GameState, showdown: Showdown, events: &mut EventBatch) {
        let active = state.active_players();
        if active.len() < 2 {
            log::warn!("{:?} showdown skipped: {} active player(s)", showdown, active.len());
            events.push(WarEvent::NotEnoughPlayers {
                showdown,
                active: active.len(),
            });
            return;
        }

        let mut owners = Vec::with_capacity(active.len());
        let mut played = Vec::with_capacity(active.len());
        for player in active {
            if let Some(card) = state.players[player].play_card() {
                state.pile.surrender(card);
                events.push(WarEvent::Played { player, card });
                owners.push(player);
                played.push(card);
            }
        }

        let Some(best) = self.config.rank_policy.highest(&played) else {
            return;
        };
        let winner = owners[best];
        let mut won = state.pile.take_pot();
        // Stakes already played sit in the pot; the rest are still in hands.
        for staked in state.pile.take_stakes() {
            if let Some(card) = state.reclaim(staked.id) {
                won.push_back(card);
            }
        }
        let cards = won.len();
        state.players[winner].add_cards_to_hand(won);

        log::info!(
            "{} takes {} cards with {}",
            state.player(winner).name(),
            cards,
            played[best]
        );
        events.push(match showdown {
            Showdown::Round => WarEvent::RoundWon { player: winner, cards },
            Showdown::War => WarEvent::WarWon { player: winner, cards },
        });
    }
}

impl RulesEngine for WarGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn step(&self, state: &GameState) -> Transition {
        let mut next = state.clone();
        let mut events = EventBatch::new();
        if !next.is_finished() {
            self.turn(&mut next, &mut events);
        }
        Transition { state: next, events }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state
            .finished
            .map(|_| GameResult::from_hand_sizes(&state.hand_sizes()))
    }
}
