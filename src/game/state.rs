//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game is still being played.
    InProgress,
    /// Player 1 holds all the cards.
    Player1Wins,
    /// Player 2 holds all the cards.
    Player2Wins,
}

impl GameState {
    /// Returns whether the game has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
