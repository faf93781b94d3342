//! N-Player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2- or 3-player
//! assumptions and works for any seat count from 1 up.

use war_engine::{
    ConfigError, GameConfig, GameResult, GameState, PlayerId, RecordingListener, RulesEngine,
    WarEvent, WarGameBuilder,
};

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {}", i)).collect()
}

/// Test that GameState correctly seats varying player counts.
#[test]
fn test_game_state_player_counts() {
    for player_count in [1, 2, 3, 4, 5, 6, 7, 8] {
        let (_, state) = WarGameBuilder::new(GameConfig::new(names(player_count)).with_seed(1))
            .build()
            .unwrap();
        assert_eq!(state.player_count(), player_count);

        for player in PlayerId::all(player_count) {
            assert_eq!(state.player(player).name(), format!("Player {}", player.index() + 1));
            assert!(!state.player(player).has_cards());
        }
    }
}

/// Seats are dealt strictly in rotation, including empty-handed players.
#[test]
fn test_deal_rotation() {
    let player_count = 5;
    let (game, mut state) = WarGameBuilder::new(GameConfig::new(names(player_count)).with_seed(3))
        .build()
        .unwrap();

    let mut dealt_to = Vec::new();
    for _ in 0..player_count * 2 {
        let events = game.apply(&mut state);
        if let Some(WarEvent::Dealt { player, .. }) = events.first() {
            dealt_to.push(player.index());
        }
    }

    let expected: Vec<_> = (0..player_count * 2).map(|i| i % player_count).collect();
    assert_eq!(dealt_to, expected);
}

/// Full games finish and conserve cards for every seat count.
#[test]
fn test_full_games_n_players() {
    for player_count in 1..=8 {
        let config = GameConfig::new(names(player_count)).with_seed(player_count as u64);
        let (game, mut state) = WarGameBuilder::new(config).build().unwrap();

        let mut recorder = RecordingListener::new();
        let result = game.play(&mut state, &mut recorder);

        assert!(state.is_finished());
        assert_eq!(state.deck.count(), 0);
        assert!(state.audit().is_ok(), "audit failed for {} players", player_count);
        assert_eq!(recorder.count(|e| matches!(e, WarEvent::GameOver { .. })), 1);
        assert_eq!(
            recorder.count(|e| matches!(e, WarEvent::Dealt { .. })),
            52
        );

        match result {
            GameResult::Winner(p) => assert!(p.index() < player_count),
            GameResult::Winners(ps) => assert!(ps.len() > 1),
            GameResult::Draw => assert!(state.active_players().is_empty()),
        }
    }
}

/// Many players: most never hold cards for long, but nothing breaks.
#[test]
fn test_many_players() {
    let (game, mut state) = WarGameBuilder::new(GameConfig::new(names(60)).with_seed(5))
        .build()
        .unwrap();
    let mut recorder = RecordingListener::new();
    game.play(&mut state, &mut recorder);

    assert!(state.audit().is_ok());
    // Wars deal several cards in one turn, so 53 turns is an upper bound.
    assert!(state.turn <= 53);
    assert_eq!(recorder.count(|e| matches!(e, WarEvent::Dealt { .. })), 52);
}

#[test]
fn test_seat_limits() {
    assert_eq!(
        WarGameBuilder::new(GameConfig::new(names(0))).build().err(),
        Some(ConfigError::NoPlayers)
    );
    assert_eq!(
        WarGameBuilder::new(GameConfig::new(names(256))).build().err(),
        Some(ConfigError::TooManyPlayers { count: 256 })
    );
    assert!(WarGameBuilder::new(GameConfig::new(names(255))).build().is_ok());
}

/// Same seed, same game: the transition function is deterministic.
#[test]
fn test_deterministic_replay() {
    let run = || {
        let (game, mut state) = WarGameBuilder::new(GameConfig::new(names(4)).with_seed(12345))
            .build()
            .unwrap();
        let mut recorder = RecordingListener::new();
        let result = game.play(&mut state, &mut recorder);
        (recorder.events, result, state)
    };

    let (events1, result1, state1): (Vec<WarEvent>, GameResult, GameState) = run();
    let (events2, result2, state2) = run();

    assert_eq!(events1, events2);
    assert_eq!(result1, result2);
    assert_eq!(state1, state2);
    assert_eq!(
        serde_json::to_string(&events1).unwrap(),
        serde_json::to_string(&events2).unwrap()
    );
}
