//! Events emitted while a game runs.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::ordering::Algorithm;

/// Something that happened during a game, in the order it happened.
///
/// The [`Display`](fmt::Display) form is the plain-text announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The game is starting.
    Welcome,
    /// The deck is being shuffled.
    Shuffling {
        /// Algorithm in use.
        algorithm: Algorithm,
    },
    /// Who receives the first card.
    FirstToDeal {
        /// Player name.
        player: String,
    },
    /// Dealing is about to start.
    Dealing {
        /// Cards each player receives, rounded down.
        cards_per_player: usize,
        /// Number of players.
        players: usize,
    },
    /// Every card has been dealt and hands are sorted.
    Dealt,
    /// A player played a card.
    TurnPlayed {
        /// Player name.
        player: String,
        /// Card played.
        card: Card,
    },
    /// A player won a round.
    RoundWon {
        /// Round number, starting at 1.
        round: usize,
        /// Winner name.
        player: String,
        /// Commentary line.
        remark: String,
    },
    /// A round ended without a winner.
    RoundTied {
        /// Round number, starting at 1.
        round: usize,
    },
    /// Final results follow.
    ResultsIntro {
        /// Number of rounds played.
        rounds: usize,
    },
    /// A player's final score.
    Score {
        /// Player name.
        player: String,
        /// Points won.
        points: u32,
    },
    /// The game has a champion.
    Champion {
        /// Champion name.
        player: String,
        /// Champion points.
        points: u32,
        /// Commentary line.
        remark: String,
    },
    /// The top score is shared.
    TieGame,
    /// Closing lesson.
    Moral {
        /// Commentary line.
        remark: String,
    },
    /// The game is over.
    Farewell,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str(
                "Welcome to the card game of War. Take a seat and try your luck. Starting game.",
            ),
            Self::Shuffling { algorithm } => write!(f, "Shuffling deck ({algorithm})."),
            Self::FirstToDeal { player } => write!(f, "{player} will be dealt first."),
            Self::Dealing {
                cards_per_player,
                players,
            } => write!(
                f,
                "Dealing {cards_per_player} cards to each of {players} players. Good luck."
            ),
            Self::Dealt => f.write_str(
                "The cards have been dealt. The players are now arranging their hands. Let's begin.",
            ),
            Self::TurnPlayed { player, card } => write!(f, "{player} plays a {card}"),
            Self::RoundWon { player, remark, .. } => {
                write!(f, "{player} wins this round. {remark}")
            }
            Self::RoundTied { .. } => f.write_str("Tie game this round. No winner. Let's move on."),
            Self::ResultsIntro { rounds } => {
                write!(f, "After {rounds} rounds, the final results are in.")
            }
            Self::Score { player, points } => write!(f, "{player} has {points} points."),
            Self::Champion {
                player,
                points,
                remark,
            } => write!(
                f,
                "{player} has won the game with {points} points. Congratulations {player}. {remark}"
            ),
            Self::TieGame => f.write_str("We seem to have a tie game folks. Weird, huh?"),
            Self::Moral { remark } => write!(f, "And the lesson for today is... {remark}"),
            Self::Farewell => f.write_str("Thank you for playing. Good bye."),
        }
    }
}

/// Receives game events.
///
/// The engine calls [`EventSink::emit`] synchronously and never waits on how
/// events are shown.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: GameEvent) {}
}
