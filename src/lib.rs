//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full game flow: building
//! and shuffling the deck, dealing, taking turns, resolving rounds and
//! naming a champion. Shuffling and sorting go through the generic
//! [`ordering`] module, and everything the game announces is emitted as a
//! [`GameEvent`] to an [`EventSink`] of the caller's choice.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameConfig, Spool};
//!
//! let config = GameConfig::default().with_players(2).with_interactive(false);
//! let mut game = Game::new(config, 42).unwrap();
//! let mut spool = Spool::from_config(&config);
//!
//! let outcome = game.run(&mut spool).unwrap();
//! assert_eq!(outcome.scores.len(), 2);
//! assert!(spool.drain().all(|message| message.delay.is_zero()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod commentary;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod ordering;
pub mod player;
pub mod result;
pub mod spool;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, SUITS, Suit};
pub use commentary::{CannedCommentator, Commentator, RemarkCategory};
pub use deck::{Deck, DeckEnd};
pub use error::{CardError, ConfigError, DeckError, GameError, PlayerError};
pub use event::{Discard, EventSink, GameEvent};
pub use game::{Game, GameState, resolve_round};
pub use options::{GameConfig, MIN_PLAYERS};
pub use ordering::{Algorithm, Direction, Ranked};
pub use player::Player;
pub use result::{GameOutcome, Play, PlayerScore, RoundOutcome, TurnOutcome};
pub use spool::{Spool, SpooledMessage};
