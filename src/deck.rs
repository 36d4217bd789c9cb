//! The 52-card deck.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use core::fmt::Write as _;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, MAX_POINT_VALUE, MIN_POINT_VALUE, SUITS};
use crate::error::DeckError;
use crate::ordering::Algorithm;

/// Which end of the deck to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckEnd {
    /// The first card.
    #[default]
    Top,
    /// The last card.
    Bottom,
}

/// An ordered deck of cards. The front of the deck is its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Assembles a full deck.
    ///
    /// Cards are laid out suit by suit (Clubs, Spades, Diamonds, Hearts),
    /// ranks 2 through Ace inside each suit.
    ///
    /// ```
    /// use warrs::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.top().map(ToString::to_string).as_deref(), Some("2 of Clubs"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for point_value in MIN_POINT_VALUE..=MAX_POINT_VALUE {
                if let Ok(card) = Card::from_value(suit, point_value) {
                    cards.push_back(card);
                }
            }
        }

        Self { cards }
    }

    /// Creates a deck holding `cards` in the given order, first card on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the card at the given end.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self, end: DeckEnd) -> Result<Card, DeckError> {
        match end {
            DeckEnd::Top => self.cards.pop_front(),
            DeckEnd::Bottom => self.cards.pop_back(),
        }
        .ok_or(DeckError::Empty)
    }

    /// Reorders the deck in place with the given algorithm.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, algorithm: Algorithm, rng: &mut R) {
        algorithm.apply(self.cards.make_contiguous(), rng);
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns an iterator over the cards, top first.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Lists every card in current order, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut listing = String::new();
        for card in &self.cards {
            let _ = writeln!(listing, "{card}");
        }
        listing
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
