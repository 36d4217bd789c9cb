//! Shuffling and sorting of ranked items.
//!
//! Every algorithm reorders a caller-owned slice in place. Algorithms are
//! selected by [`Algorithm`], which can be looked up by name:
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use warrs::ordering::Algorithm;
//!
//! let mut values: Vec<u8> = vec![9, 2, 14, 5];
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! Algorithm::from_name("orderByHighest").apply(&mut values, &mut rng);
//! assert_eq!(values, [14, 9, 5, 2]);
//! ```

use core::cmp::{Ordering, Reverse};
use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::card::Card;
use crate::error::ConfigError;

/// Items that expose a numeric ordering key.
pub trait Ranked {
    /// Returns the value used when sorting.
    fn rank_value(&self) -> u8;
}

impl Ranked for u8 {
    fn rank_value(&self) -> u8 {
        *self
    }
}

impl Ranked for Card {
    fn rank_value(&self) -> u8 {
        self.point_value()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Lowest value first.
    #[default]
    Ascending,
    /// Highest value first.
    Descending,
}

/// A named reordering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Sort by independent uniform random keys.
    #[default]
    Random,
    /// Unbiased Fisher-Yates shuffle.
    FisherYates,
    /// Sort by value in the given direction.
    OrderByValue(Direction),
    /// Sort by value, lowest first.
    OrderByLowest,
    /// Sort by value, highest first.
    OrderByHighest,
}

const ALGORITHM_NAMES: [(&str, Algorithm); 5] = [
    ("random", Algorithm::Random),
    ("fisherYates", Algorithm::FisherYates),
    ("orderByValue", Algorithm::OrderByValue(Direction::Ascending)),
    ("orderByLowest", Algorithm::OrderByLowest),
    ("orderByHighest", Algorithm::OrderByHighest),
];

impl Algorithm {
    /// Every supported algorithm, in lookup-table order.
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::FisherYates,
        Self::OrderByValue(Direction::Ascending),
        Self::OrderByLowest,
        Self::OrderByHighest,
    ];

    /// Returns the lookup name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::FisherYates => "fisherYates",
            Self::OrderByValue(_) => "orderByValue",
            Self::OrderByLowest => "orderByLowest",
            Self::OrderByHighest => "orderByHighest",
        }
    }

    /// Looks up an algorithm by name, case-insensitively.
    ///
    /// Unknown names fall back to [`Algorithm::Random`]. Use
    /// [`str::parse`] to reject them instead.
    ///
    /// ```
    /// use warrs::ordering::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_name("FISHERYATES"), Algorithm::FisherYates);
    /// assert_eq!(Algorithm::from_name("special"), Algorithm::Random);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "unknown ordering algorithm, falling back to random");
            Self::Random
        })
    }

    /// Reorders `items` in place.
    ///
    /// Sorting algorithms ignore `rng`.
    pub fn apply<T, R>(self, items: &mut [T], rng: &mut R)
    where
        T: Ranked,
        R: Rng + ?Sized,
    {
        tracing::trace!(algorithm = self.name(), len = items.len(), "reordering items");

        match self {
            Self::Random => shuffle_random(items, rng),
            Self::FisherYates => shuffle_fisher_yates(items, rng),
            Self::OrderByValue(direction) => order_by_value(items, direction),
            Self::OrderByLowest => order_by_value(items, Direction::Ascending),
            Self::OrderByHighest => order_by_value(items, Direction::Descending),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGORITHM_NAMES
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, algorithm)| algorithm)
            .ok_or(ConfigError::UnknownAlgorithm)
    }
}

/// Random sort key with a total order.
#[derive(Debug, Clone, Copy)]
struct ShuffleKey(f64);

impl PartialEq for ShuffleKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ShuffleKey {}

impl PartialOrd for ShuffleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShuffleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shuffles by tagging each item with a uniform `[0, 1)` key and sorting on it.
///
/// Keys are drawn once per item in slice order, then dropped.
pub fn shuffle_random<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.sort_by_cached_key(|_| ShuffleKey(rng.random::<f64>()));
}

/// Shuffles with the Fisher-Yates algorithm.
///
/// Each step picks a uniform index inside the unshuffled prefix and moves
/// that item to the end of the prefix, which then shrinks by one.
pub fn shuffle_fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for remaining in (1..=items.len()).rev() {
        let picked = rng.random_range(0..remaining);
        items.swap(picked, remaining - 1);
    }
}

/// Sorts items by [`Ranked::rank_value`].
pub fn order_by_value<T: Ranked>(items: &mut [T], direction: Direction) {
    order_by_key(items, direction, T::rank_value);
}

/// Sorts items by an arbitrary key.
///
/// This is the general form of [`order_by_value`], for items whose ordering
/// key lives in one of their fields.
pub fn order_by_key<T, K, F>(items: &mut [T], direction: Direction, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    match direction {
        Direction::Ascending => items.sort_by_key(key),
        Direction::Descending => items.sort_by_key(|item| Reverse(key(item))),
    }
}
