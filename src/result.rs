//! Turn, round and game result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::ordering::Ranked;

/// A card played by a player during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    /// The card played.
    pub card: Card,
    /// Index of the player who played it.
    pub player: usize,
}

impl Ranked for Play {
    fn rank_value(&self) -> u8 {
        self.card.point_value()
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: usize,
    /// Cards played this round, highest first.
    pub plays: Vec<Play>,
    /// Index of the player who won the round, `None` on a tie.
    pub winner: Option<usize>,
}

impl RoundOutcome {
    /// Returns whether nobody won the round.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Index of the player whose turn it was.
    pub player: usize,
    /// The card played, `None` if the player's hand was already spent.
    pub card: Option<Card>,
    /// The resolved round, if this turn closed one.
    pub round: Option<RoundOutcome>,
}

/// Final score of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player's name.
    pub name: String,
    /// Points won.
    pub points: u32,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Scores in seat order.
    pub scores: Vec<PlayerScore>,
    /// Number of rounds played.
    pub rounds: usize,
    /// Index of the sole top scorer, `None` when the top score is shared.
    pub champion: Option<usize>,
}

impl GameOutcome {
    /// Returns whether the game ended without a champion.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.champion.is_none()
    }

    /// Returns the champion's score.
    #[must_use]
    pub fn champion_score(&self) -> Option<&PlayerScore> {
        self.champion.and_then(|index| self.scores.get(index))
    }
}
