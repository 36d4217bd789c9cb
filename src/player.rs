//! Player hands and scores.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::card::Card;
use crate::deck::{Deck, DeckEnd};
use crate::error::{DeckError, PlayerError};
use crate::ordering::{self, Direction};

/// A player's hand and score.
///
/// The hand behaves like a stack: the most recently received card is the
/// first one played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Friendly name.
    name: String,
    /// Cards in the hand, top last.
    hand: Vec<Card>,
    /// Points won so far.
    points: u32,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            points: 0,
        }
    }

    /// Draws `count` cards from `deck` into the hand, keeping draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out. Cards drawn before that stay in
    /// the hand.
    pub fn draw(&mut self, deck: &mut Deck, count: usize, end: DeckEnd) -> Result<(), DeckError> {
        for _ in 0..count {
            self.hand.push(deck.draw(end)?);
        }
        Ok(())
    }

    /// Adds a dealt card to the top of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the top card of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty.
    pub fn play(&mut self) -> Result<Card, PlayerError> {
        self.hand.pop().ok_or(PlayerError::EmptyHand)
    }

    /// Sorts the hand lowest first, so the highest card is played next.
    pub fn sort_hand(&mut self) {
        ordering::order_by_value(&mut self.hand, Direction::Ascending);
    }

    /// Adds points to the score.
    pub const fn award_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Adds points given as text, such as `"2"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is not a non-negative integer.
    pub fn award_points_str(&mut self, amount: &str) -> Result<(), PlayerError> {
        let amount = amount
            .trim()
            .parse::<u32>()
            .map_err(|_| PlayerError::InvalidPoints)?;
        self.award_points(amount);
        Ok(())
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the player.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the points won so far.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns the cards in the hand, top last.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Lists the hand, one card per line.
    #[must_use]
    pub fn hand_listing(&self) -> String {
        let mut listing = String::new();
        for card in &self.hand {
            let _ = writeln!(listing, "{card}");
        }
        listing
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}
