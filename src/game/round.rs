use alloc::string::ToString;

use crate::commentary::RemarkCategory;
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};
use crate::ordering::{self, Direction, Ranked};
use crate::result::{Play, RoundOutcome, TurnOutcome};

use super::{Game, GameState};

/// Sorts a round highest first and returns the winning player, if any.
///
/// The round is won by the unique highest card. When the two highest cards
/// share a value nobody wins. A round with a single play is won by that
/// player.
///
/// ```
/// use warrs::{Card, Play, Suit, resolve_round};
///
/// let mut plays = [
///     Play { card: Card::from_value(Suit::Clubs, 7).unwrap(), player: 1 },
///     Play { card: Card::from_value(Suit::Hearts, 10).unwrap(), player: 0 },
/// ];
/// assert_eq!(resolve_round(&mut plays), Some(0));
/// assert_eq!(plays[0].player, 0);
/// ```
pub fn resolve_round(plays: &mut [Play]) -> Option<usize> {
    ordering::order_by_value(plays, Direction::Descending);

    match plays {
        [] => None,
        [only] => Some(only.player),
        [first, second, ..] => (first.rank_value() > second.rank_value()).then_some(first.player),
    }
}

impl Game {
    /// Plays the current player's turn.
    ///
    /// A player whose hand is already spent sits the turn out. The last seat's
    /// turn closes the round: it is resolved, the winner scores a point, and
    /// once every hand is spent the game moves to [`GameState::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn play_turn<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<TurnOutcome, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::InvalidState);
        }

        let seat = self.whose_turn_index();
        let player = &mut self.players[seat];

        let card = if player.has_cards() {
            let card = player.play()?;
            tracing::trace!(player = player.name(), card = %card, "card played");
            sink.emit(GameEvent::TurnPlayed {
                player: player.name().to_string(),
                card,
            });
            self.round.push(Play { card, player: seat });
            Some(card)
        } else {
            tracing::trace!(player = player.name(), "hand spent, turn skipped");
            None
        };

        let round = if seat == self.players.len() - 1 {
            Some(self.close_round(sink))
        } else {
            None
        };

        self.change_turn();

        if round.is_some() && self.all_hands_empty() {
            self.transition(GameState::GameOver);
        }

        Ok(TurnOutcome {
            player: seat,
            card,
            round,
        })
    }

    /// Plays turns until the current round is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn play_round<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<RoundOutcome, GameError> {
        loop {
            if let Some(round) = self.play_turn(sink)?.round {
                return Ok(round);
            }
        }
    }

    fn close_round<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> RoundOutcome {
        self.transition(GameState::RoundResolution);

        let mut plays = core::mem::take(&mut self.round);
        let winner = resolve_round(&mut plays);
        let round = self.rounds_played + 1;

        if let Some(seat) = winner {
            let player = &mut self.players[seat];
            player.award_points(1);
            tracing::debug!(round, winner = player.name(), "round won");

            let name = player.name().to_string();
            let remark = self
                .commentator
                .remark(RemarkCategory::Round, self.rounds_played);
            sink.emit(GameEvent::RoundWon {
                round,
                player: name,
                remark,
            });
        } else {
            tracing::debug!(round, "round tied");
            sink.emit(GameEvent::RoundTied { round });
        }

        self.transition(GameState::Playing);

        RoundOutcome {
            round,
            plays,
            winner,
        }
    }
}
