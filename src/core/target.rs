//! The secret number and the seam through which it is drawn.

use super::guess::{Guess, GuessError, MAX_GUESS, MIN_GUESS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Secret value a round is played against, always in `MIN_GUESS..=MAX_GUESS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Target(u8);

impl Target {
    pub fn new(value: u8) -> Result<Self, GuessError> {
        Guess::new(value).map(|guess| Self(guess.value()))
    }

    /// Target for a value sampled from `TARGET_RANGE`; anything outside is
    /// clamped to the nearest bound.
    pub(crate) fn from_drawn(value: u8) -> Self {
        Self(value.clamp(MIN_GUESS, MAX_GUESS))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Where `guess` lies relative to this target.
    pub fn compare(self, guess: Guess) -> Ordering {
        guess.value().cmp(&self.0)
    }
}

impl TryFrom<u8> for Target {
    type Error = GuessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for u8 {
    fn from(target: Target) -> Self {
        target.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplies targets for new rounds.
///
/// The core never draws randomness itself; callers pass a source in, which
/// keeps round creation reproducible under test.
pub trait TargetSource {
    /// Draw the next target. Every value in `MIN_GUESS..=MAX_GUESS` must be
    /// reachable and nothing outside it may be produced.
    fn next_target(&mut self) -> Target;
}

impl<S: TargetSource + ?Sized> TargetSource for &mut S {
    fn next_target(&mut self) -> Target {
        (**self).next_target()
    }
}

impl<S: TargetSource + ?Sized> TargetSource for Box<S> {
    fn next_target(&mut self) -> Target {
        (**self).next_target()
    }
}

/// Range of legal targets, for sources that sample it.
pub const TARGET_RANGE: std::ops::RangeInclusive<u8> = MIN_GUESS..=MAX_GUESS;
