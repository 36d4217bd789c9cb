use alloc::string::ToString;
use alloc::vec::Vec;

use crate::commentary::RemarkCategory;
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};
use crate::result::{GameOutcome, PlayerScore};

use super::{Game, GameState};

impl Game {
    /// Compares final scores and announces the champion.
    ///
    /// The champion is the sole player with the highest score. When the top
    /// score is shared the game is a tie.
    ///
    /// # Errors
    ///
    /// Returns an error if players still hold cards or the game never
    /// started.
    pub fn finish<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<GameOutcome, GameError> {
        match self.state {
            GameState::GameOver => {}
            GameState::Playing | GameState::RoundResolution => {
                return Err(GameError::HandsNotSpent);
            }
            GameState::Setup | GameState::Dealing => return Err(GameError::InvalidState),
        }

        let rounds = self.rounds_played;
        sink.emit(GameEvent::ResultsIntro { rounds });

        let scores: Vec<PlayerScore> = self
            .players
            .iter()
            .map(|player| PlayerScore {
                name: player.name().to_string(),
                points: player.points(),
            })
            .collect();

        for score in &scores {
            sink.emit(GameEvent::Score {
                player: score.name.clone(),
                points: score.points,
            });
        }

        let high_score = scores.iter().map(|score| score.points).max();
        let mut leaders = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| Some(score.points) == high_score)
            .map(|(seat, _)| seat);
        let champion = match (leaders.next(), leaders.next()) {
            (Some(seat), None) => Some(seat),
            _ => None,
        };

        match champion {
            Some(seat) => {
                let score = &scores[seat];
                tracing::debug!(champion = %score.name, points = score.points, rounds, "game won");
                let remark = self.commentator.remark(RemarkCategory::GameEnd, rounds);
                sink.emit(GameEvent::Champion {
                    player: score.name.clone(),
                    points: score.points,
                    remark,
                });
            }
            None => {
                tracing::debug!(?high_score, rounds, "game tied");
                sink.emit(GameEvent::TieGame);
            }
        }

        let remark = self.commentator.remark(RemarkCategory::Moral, rounds);
        sink.emit(GameEvent::Moral { remark });
        sink.emit(GameEvent::Farewell);

        Ok(GameOutcome {
            scores,
            rounds,
            champion,
        })
    }
}
