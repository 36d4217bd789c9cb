//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Deck built and players seated.
    Setup,
    /// Deck shuffled, waiting to deal.
    Dealing,
    /// Players are taking turns.
    Playing,
    /// The current round is being scored.
    RoundResolution,
    /// Every hand is spent; final results can be computed.
    GameOver,
}
