//! Game engine and state management.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::commentary::{CannedCommentator, Commentator};
use crate::deck::Deck;
use crate::error::{ConfigError, GameError};
use crate::event::{EventSink, GameEvent};
use crate::options::GameConfig;
use crate::ordering;
use crate::player::Player;
use crate::result::{GameOutcome, Play};

mod deal;
mod round;
mod showdown;
pub mod state;

pub use round::resolve_round;
pub use state::GameState;

/// A game of War that manages the deck, the players and the round flow.
///
/// The game owns the deck, every hand and the shuffle RNG. Use
/// [`GameConfig`] to choose the table size and shuffle algorithm.
///
/// ```
/// use warrs::{Game, GameConfig, GameEvent};
/// use warrs::ordering::Algorithm;
///
/// let config = GameConfig::default().with_algorithm(Algorithm::FisherYates);
/// let mut game = Game::new(config, 42).unwrap();
/// let mut events: Vec<GameEvent> = Vec::new();
///
/// let outcome = game.run(&mut events).unwrap();
/// assert_eq!(outcome.rounds, 26);
/// ```
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Game configuration.
    config: GameConfig,
    /// Current game state.
    state: GameState,
    /// Players in seat order.
    players: Vec<Player>,
    /// Turns taken since dealing finished.
    turn_counter: usize,
    /// Full turn cycles completed.
    rounds_played: usize,
    /// Cards played in the current round.
    round: Vec<Play>,
    /// Source of remarks for round and game announcements.
    commentator: Box<dyn Commentator>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with the given seed and canned commentary.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_commentator(config, seed, CannedCommentator::new(seed))
    }

    /// Creates a game with the given seed and commentary provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_commentator(
        config: GameConfig,
        seed: u64,
        commentator: impl Commentator + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = (1..=config.players)
            .map(|seat| Player::new(format!("Player {seat}")))
            .collect();

        tracing::debug!(
            players = config.players,
            algorithm = config.algorithm.name(),
            seed,
            "game created"
        );

        Ok(Self {
            deck: Deck::new(),
            config,
            state: GameState::Setup,
            players,
            turn_counter: 0,
            rounds_played: 0,
            round: Vec::new(),
            commentator: Box::new(commentator),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    fn transition(&mut self, next: GameState) {
        tracing::debug!(from = ?self.state, to = ?next, "game state transition");
        self.state = next;
    }

    /// Advances the turn counter, counting a round every full cycle.
    fn change_turn(&mut self) {
        self.turn_counter += 1;
        if self.turn_counter % self.players.len() == 0 {
            self.rounds_played += 1;
        }
    }

    fn reset_turns(&mut self) {
        self.turn_counter = 0;
        self.rounds_played = 0;
    }

    /// Replaces the deck before dealing, for scripted games.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt.
    pub fn replace_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        if !matches!(self.state, GameState::Setup | GameState::Dealing) {
            return Err(GameError::InvalidState);
        }
        self.deck = deck;
        Ok(())
    }

    /// Shuffles the seating order so a random player is dealt first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has left the setup state.
    pub fn roll_for_first<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::InvalidState);
        }
        ordering::shuffle_random(&mut self.players, &mut self.rng);
        sink.emit(GameEvent::FirstToDeal {
            player: self.first_player().name().into(),
        });
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player who is dealt first.
    #[must_use]
    pub fn first_player(&self) -> &Player {
        &self.players[0]
    }

    /// Returns the number of turns taken.
    #[must_use]
    pub const fn turn_counter(&self) -> usize {
        self.turn_counter
    }

    /// Returns the seat index of the player whose turn it is.
    #[must_use]
    pub fn whose_turn_index(&self) -> usize {
        self.turn_counter % self.players.len()
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.whose_turn_index()]
    }

    /// Returns the number of full turn cycles completed.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the cards played so far in the current round.
    #[must_use]
    pub fn current_round(&self) -> &[Play] {
        &self.round
    }

    /// Returns whether every player has played out their hand.
    #[must_use]
    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|player| !player.has_cards())
    }

    /// Plays a complete game: shuffle, deal, every round, final results.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already started or an internal
    /// invariant breaks.
    pub fn run<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<GameOutcome, GameError> {
        self.shuffle_and_deal(sink)?;
        while self.state == GameState::Playing {
            self.play_round(sink)?;
        }
        self.finish(sink)
    }
}
