//! Commentary lines spliced into game events.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// When a remark is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemarkCategory {
    /// After a round is won.
    Round,
    /// After the champion is announced.
    GameEnd,
    /// The closing lesson.
    Moral,
}

impl RemarkCategory {
    /// Maps any index onto a category, wrapping around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Round,
            1 => Self::GameEnd,
            _ => Self::Moral,
        }
    }
}

/// Supplies commentary for game events.
pub trait Commentator {
    /// Returns a remark for `category`.
    fn remark(&mut self, category: RemarkCategory, rounds_played: usize) -> String;
}

const ROUND_REMARKS: [&str; 9] = [
    "Wow!",
    "Yowza!!!",
    "Awesome!!",
    "Right on!",
    "This is getting to be a habit.",
    "Oh, you're pretty good at this.",
    "You're on a roll!!",
    "Nice!!",
    "Oh, yeah!!!",
];

const GAME_END_REMARKS: [&str; 5] = [
    "I had a feeling!",
    "Too bad for the other side.",
    "I did not see that coming.",
    "I knew you had potential!!!",
    "Even bots get to win sometimes.",
];

const MORAL_REMARKS: [&str; 4] = [
    "There are winners, and then there's everyone else.",
    "Some win at life, some win at games.",
    "Everyone's a winner in this game. The losers are just less so.",
    "Losers are winners too. They just don't get the prizes.",
];

/// Picks canned remarks at random.
#[derive(Debug, Clone)]
pub struct CannedCommentator {
    rng: ChaCha8Rng,
}

impl CannedCommentator {
    /// Creates a commentator with a seeded picker.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, lines: &[&str]) -> String {
        lines[self.rng.random_range(0..lines.len())].to_string()
    }
}

impl Commentator for CannedCommentator {
    fn remark(&mut self, category: RemarkCategory, rounds_played: usize) -> String {
        match category {
            RemarkCategory::Round => self.pick(&ROUND_REMARKS),
            RemarkCategory::GameEnd => self.pick(&GAME_END_REMARKS),
            RemarkCategory::Moral => {
                // One extra slot for the round-count remark.
                let slot = self.rng.random_range(0..=MORAL_REMARKS.len());
                MORAL_REMARKS.get(slot).map_or_else(
                    || {
                        format!(
                            "Things in life come and go, but this game was only {rounds_played} rounds."
                        )
                    },
                    ToString::to_string,
                )
            }
        }
    }
}
