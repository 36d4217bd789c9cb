//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

/// Suits in deck assembly order.
pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

impl Suit {
    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUITS
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardError::UnknownSuit)
    }
}

/// The label printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A numeral card, 2 through 10.
    Number(u8),
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
    /// Ace (14).
    Ace,
}

impl Face {
    /// Returns the face belonging to a point value, or `None` outside `2..=14`.
    #[must_use]
    pub const fn for_value(point_value: u8) -> Option<Self> {
        match point_value {
            2..=10 => Some(Self::Number(point_value)),
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            14 => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the point value this face stands for.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Number(value) => value,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            Self::Ace => f.write_str("Ace"),
        }
    }
}

const COURT_FACES: [(Face, &str); 4] = [
    (Face::Jack, "Jack"),
    (Face::Queen, "Queen"),
    (Face::King, "King"),
    (Face::Ace, "Ace"),
];

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u8>() {
            return match value {
                2..=10 => Ok(Self::Number(value)),
                _ => Err(CardError::UnknownFace),
            };
        }

        COURT_FACES
            .into_iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(face, _)| face)
            .ok_or(CardError::UnknownFace)
    }
}

/// A playing card.
///
/// Cards are immutable once built. Use [`Card::from_value`] to let the face
/// follow from the point value.
///
/// ```
/// use warrs::{Card, Suit};
///
/// let card = Card::from_value(Suit::Hearts, 12).unwrap();
/// assert_eq!(card.to_string(), "Queen of Hearts");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    point_value: u8,
    suit: Suit,
    face: Face,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns an error if the point value is outside `2..=14` or the face
    /// does not match the point value.
    pub fn new(point_value: u8, suit: Suit, face: Face) -> Result<Self, CardError> {
        let expected = Face::for_value(point_value).ok_or(CardError::InvalidValue(point_value))?;
        if expected != face {
            return Err(CardError::FaceMismatch);
        }
        Ok(Self {
            point_value,
            suit,
            face,
        })
    }

    /// Creates a card whose face is derived from the point value.
    ///
    /// # Errors
    ///
    /// Returns an error if the point value is outside `2..=14`.
    pub const fn from_value(suit: Suit, point_value: u8) -> Result<Self, CardError> {
        match Face::for_value(point_value) {
            Some(face) => Ok(Self {
                point_value,
                suit,
                face,
            }),
            None => Err(CardError::InvalidValue(point_value)),
        }
    }

    /// Creates a card from textual suit and face labels.
    ///
    /// Labels are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if either label is unknown or the face does not match
    /// the point value.
    pub fn from_labels(point_value: u8, suit: &str, face: &str) -> Result<Self, CardError> {
        Self::new(point_value, suit.parse()?, face.parse()?)
    }

    /// Returns the point value (2 through 14, Ace high).
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        self.point_value
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the face label.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest point value in a deck.
pub const MIN_POINT_VALUE: u8 = 2;

/// Highest point value in a deck (Ace).
pub const MAX_POINT_VALUE: u8 = 14;
