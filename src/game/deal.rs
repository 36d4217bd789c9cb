use crate::deck::DeckEnd;
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck with the configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup state.
    pub fn shuffle<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::InvalidState);
        }

        sink.emit(GameEvent::Shuffling {
            algorithm: self.config.algorithm,
        });
        self.deck.shuffle(self.config.algorithm, &mut self.rng);
        self.transition(GameState::Dealing);

        Ok(())
    }

    /// Deals the whole deck round-robin, then sorts every hand.
    ///
    /// Cards go out one at a time in turn order starting with the first
    /// seat, so when the deck does not split evenly the earliest seats hold
    /// one extra card. The deck is dealt as-is when [`Game::shuffle`] was
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or dealing state.
    pub fn deal<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), GameError> {
        if !matches!(self.state, GameState::Setup | GameState::Dealing) {
            return Err(GameError::InvalidState);
        }
        if self.state == GameState::Setup {
            self.transition(GameState::Dealing);
        }

        let player_count = self.players.len();
        sink.emit(GameEvent::FirstToDeal {
            player: self.first_player().name().into(),
        });
        sink.emit(GameEvent::Dealing {
            cards_per_player: self.deck.len() / player_count,
            players: player_count,
        });

        let deck_count = self.deck.len();
        for _ in 0..deck_count {
            let card = self.deck.draw(DeckEnd::Top)?;
            let seat = self.whose_turn_index();
            self.players[seat].receive(card);
            self.change_turn();
        }
        self.reset_turns();

        for player in &mut self.players {
            player.sort_hand();
        }

        tracing::debug!(cards = deck_count, players = player_count, "deck dealt");
        sink.emit(GameEvent::Dealt);

        if self.all_hands_empty() {
            self.transition(GameState::GameOver);
        } else {
            self.transition(GameState::Playing);
        }

        Ok(())
    }

    /// Announces the game, shuffles and deals.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup state.
    pub fn shuffle_and_deal<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::InvalidState);
        }

        sink.emit(GameEvent::Welcome);
        self.shuffle(sink)?;
        self.deal(sink)
    }
}
