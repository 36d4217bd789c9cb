//! Game configuration.

use crate::error::ConfigError;
use crate::ordering::Algorithm;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Configuration for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameConfig;
/// use warrs::ordering::Algorithm;
///
/// let config = GameConfig::default()
///     .with_players(4)
///     .with_algorithm(Algorithm::FisherYates)
///     .with_interactive(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Number of players at the table.
    pub players: usize,
    /// Algorithm used to shuffle the deck before dealing.
    pub algorithm: Algorithm,
    /// Whether output is paced to mimic live play. Has no effect on the game.
    pub interactive: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            algorithm: Algorithm::Random,
            interactive: true,
        }
    }
}

impl GameConfig {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameConfig;
    ///
    /// let config = GameConfig::default().with_players(3);
    /// assert_eq!(config.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the shuffle algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the shuffle algorithm by name, falling back to random for unknown
    /// names.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameConfig;
    /// use warrs::ordering::Algorithm;
    ///
    /// let config = GameConfig::default().with_algorithm_name("fisheryates");
    /// assert_eq!(config.algorithm, Algorithm::FisherYates);
    /// ```
    #[must_use]
    pub fn with_algorithm_name(self, name: &str) -> Self {
        self.with_algorithm(Algorithm::from_name(name))
    }

    /// Sets whether output is paced.
    #[must_use]
    pub const fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Checks that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are configured.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        Ok(())
    }
}
