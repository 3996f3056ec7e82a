//! CLI War example: plays one announced game.

use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{ConsoleAnnouncer, Game, GameState};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("War (seed {seed})");

    let game = Game::new(ConsoleAnnouncer::new(), seed);
    let winner = game.run();

    let (size1, size2) = game.hand_sizes();
    let label = match winner {
        GameState::Player1Wins => "player 1",
        GameState::Player2Wins => "player 2",
        GameState::InProgress => unreachable!("run() only returns terminal states"),
    };
    println!("Game over: {label} holds all the cards ({size1} / {size2}).");
}
