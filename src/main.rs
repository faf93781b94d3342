//! Plays one game of War among three fixed players and prints every
//! notification.

use war_engine::{
    EventListener, GameConfig, GameResult, GameState, RulesEngine, WarEvent, WarGameBuilder,
};

const PLAYER_NAMES: [&str; 3] = ["Player 1", "Player 2", "Player 3"];

/// Prints each event on stdout.
struct ConsoleListener;

impl EventListener for ConsoleListener {
    fn on_event(&mut self, state: &GameState, event: &WarEvent) {
        println!("{}", event.describe(state));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (game, mut state) = match WarGameBuilder::new(GameConfig::new(PLAYER_NAMES)).build() {
        Ok(built) => built,
        Err(err) => {
            log::error!("invalid configuration: {}", err);
            return;
        }
    };

    let result = game.play(&mut state, &mut ConsoleListener);

    for (player, cards) in game.standings(&state) {
        println!("{:<12}{:>3} cards", state.player(player).name(), cards);
    }
    match result {
        GameResult::Winner(p) => println!("{} holds the most cards.", state.player(p).name()),
        GameResult::Winners(ps) => println!("{} players share the lead.", ps.len()),
        GameResult::Draw => println!("Nobody holds any cards."),
    }
}
