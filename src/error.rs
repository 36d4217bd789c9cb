//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Point value outside 2 through 14.
    #[error("point value {0} is outside 2..=14")]
    InvalidValue(u8),
    /// Suit label is not one of the four suits.
    #[error("unknown suit")]
    UnknownSuit,
    /// Face label is not a numeral or court card.
    #[error("unknown face")]
    UnknownFace,
    /// Face does not match the point value.
    #[error("face does not match point value")]
    FaceMismatch,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No cards left in the hand.
    #[error("no cards left in the hand")]
    EmptyHand,
    /// Point award is not a number.
    #[error("point award is not a number")]
    InvalidPoints,
}

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players requested.
    #[error("at least two players are required, got {0}")]
    TooFewPlayers(usize),
    /// Ordering algorithm name is not recognized.
    #[error("unknown ordering algorithm")]
    UnknownAlgorithm,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Players still hold cards.
    #[error("players still hold cards")]
    HandsNotSpent,
    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A player operation failed.
    #[error(transparent)]
    Player(#[from] PlayerError),
}
