//! Ordered output queue with pacing delays.
//!
//! The engine writes events synchronously; the presentation layer drains the
//! spool and waits out each message's delay however it likes.
//!
//! ```
//! use core::time::Duration;
//! use warrs::Spool;
//!
//! let mut spool = Spool::new(true);
//! spool.push("first");
//! spool.push("second");
//!
//! let delays: Vec<Duration> = spool.drain().map(|message| message.delay).collect();
//! assert_eq!(delays, [Duration::ZERO, Duration::from_secs(1)]);
//! ```

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use core::time::Duration;

use crate::event::{EventSink, GameEvent};
use crate::options::GameConfig;

/// Default spacing between paced messages.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// A queued message and when it should be shown, relative to the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpooledMessage {
    /// Plain-text message.
    pub text: String,
    /// Delay from the start of output; zero when not interactive.
    pub delay: Duration,
}

/// First-in first-out output queue.
///
/// In interactive mode the `n`th message (counting from zero) is delayed by
/// `n` intervals, so delays strictly increase in generation order.
#[derive(Debug, Clone)]
pub struct Spool {
    queue: VecDeque<SpooledMessage>,
    interval: Duration,
    interactive: bool,
    spooled: usize,
}

impl Spool {
    /// Creates a spool with the default interval.
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self {
            queue: VecDeque::new(),
            interval: DEFAULT_INTERVAL,
            interactive,
            spooled: 0,
        }
    }

    /// Creates a spool paced according to `config`.
    #[must_use]
    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.interactive)
    }

    /// Sets the spacing between messages.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Queues a message behind every message spooled so far.
    pub fn push(&mut self, text: impl Into<String>) {
        let delay = if self.interactive {
            self.interval
                .saturating_mul(u32::try_from(self.spooled).unwrap_or(u32::MAX))
        } else {
            Duration::ZERO
        };
        self.spooled += 1;
        self.queue.push_back(SpooledMessage {
            text: text.into(),
            delay,
        });
    }

    /// Removes and returns queued messages in generation order.
    pub fn drain(&mut self) -> impl Iterator<Item = SpooledMessage> + '_ {
        self.queue.drain(..)
    }

    /// Returns the number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns whether messages are paced.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl EventSink for Spool {
    fn emit(&mut self, event: GameEvent) {
        self.push(event.to_string());
    }
}
