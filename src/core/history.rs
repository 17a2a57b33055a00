//! Guess history tracking.
//!
//! Provides immutable tracking of the valid guesses made in a round,
//! following functional programming principles.

use super::feedback::Feedback;
use super::guess::Guess;
use super::target::Target;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;

/// How a valid guess compared with the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    /// Judge `guess` against `target` (pure).
    pub fn judge(guess: Guess, target: Target) -> Self {
        match target.compare(guess) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct,
        }
    }

    /// Feedback for this outcome, given the attempt count including the
    /// guess that produced it.
    pub fn feedback(self, attempts: usize) -> Feedback {
        match self {
            Self::TooLow => Feedback::too_low(),
            Self::TooHigh => Feedback::too_high(),
            Self::Correct => Feedback::solved(attempts),
        }
    }
}

/// Record of a single valid guess.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Guess, GuessRecord, Outcome};
/// use chrono::Utc;
///
/// let record = GuessRecord {
///     guess: Guess::new(25).unwrap(),
///     outcome: Outcome::TooLow,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert_eq!(record.guess.value(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The value guessed
    pub guess: Guess,
    /// How it compared with the target
    pub outcome: Outcome,
    /// When the guess was submitted
    pub timestamp: DateTime<Utc>,
    /// 1-based attempt number of this guess within the round
    pub attempt: usize,
}

/// Ordered history of valid guesses.
///
/// History is immutable - the `record` method returns a new history
/// with the guess added.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Guess, GuessHistory, GuessRecord, Outcome};
/// use chrono::Utc;
///
/// let history = GuessHistory::new();
/// let next = history.record(GuessRecord {
///     guess: Guess::new(60).unwrap(),
///     outcome: Outcome::TooHigh,
///     timestamp: Utc::now(),
///     attempt: 1,
/// });
///
/// assert!(history.is_empty()); // Original unchanged
/// assert_eq!(next.values(), vec![60]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a guess, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, record: GuessRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Guessed values in submission order.
    pub fn values(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.guess.value()).collect()
    }

    /// All records in submission order.
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    /// True once the most recent guess hit the target.
    pub fn is_solved(&self) -> bool {
        self.last()
            .is_some_and(|record| record.outcome == Outcome::Correct)
    }

    /// Time between the first and last guess.
    ///
    /// Returns `None` when there are no guesses.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
