//! Guess parsing and validation.
//!
//! Raw text from a front end becomes a [`Guess`] here or is rejected with a
//! [`GuessError`]. Parsing is pure and total: every input maps to exactly one
//! of the two outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

/// Smallest value a guess or target may take.
pub const MIN_GUESS: u8 = 1;

/// Largest value a guess or target may take.
pub const MAX_GUESS: u8 = 100;

/// Why raw input was not accepted as a guess.
///
/// Front ends show the same message for every variant; the distinction is
/// kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess is empty")]
    Empty,

    #[error("'{input}' is not a whole number")]
    NotWholeNumber { input: String },

    #[error("'{input}' is outside 1..=100")]
    OutOfRange { input: String },
}

/// A validated guess in `MIN_GUESS..=MAX_GUESS`.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Guess, GuessError};
///
/// assert_eq!(Guess::parse(" 42 ").unwrap().value(), 42);
/// assert!(matches!(Guess::parse("3.7"), Err(GuessError::NotWholeNumber { .. })));
/// assert!(matches!(Guess::parse("101"), Err(GuessError::OutOfRange { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Guess(u8);

impl Guess {
    /// Validate an already-numeric value.
    pub fn new(value: u8) -> Result<Self, GuessError> {
        if (MIN_GUESS..=MAX_GUESS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GuessError::OutOfRange {
                input: value.to_string(),
            })
        }
    }

    /// Parse raw user input.
    ///
    /// Surrounding whitespace is ignored. The rest must be an optionally
    /// signed base-10 integer; decimals and trailing characters are rejected.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }

        let value: i64 = trimmed.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => GuessError::OutOfRange {
                    input: trimmed.to_string(),
                },
                _ => GuessError::NotWholeNumber {
                    input: trimmed.to_string(),
                },
            }
        })?;

        let value = u8::try_from(value).map_err(|_| GuessError::OutOfRange {
            input: trimmed.to_string(),
        })?;
        Self::new(value)
    }

    /// The guessed number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u8> for Guess {
    type Error = GuessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Guess> for u8 {
    fn from(guess: Guess) -> Self {
        guess.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_at_both_bounds() {
        assert_eq!(Guess::parse("1").unwrap().value(), MIN_GUESS);
        assert_eq!(Guess::parse("100").unwrap().value(), MAX_GUESS);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(Guess::parse("  7\n").unwrap().value(), 7);
        assert_eq!(Guess::parse("\t+12 ").unwrap().value(), 12);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Guess::parse(""), Err(GuessError::Empty));
        assert_eq!(Guess::parse("   "), Err(GuessError::Empty));
    }

    #[test]
    fn rejects_non_numeric_input() {
        for raw in ["abc", "3.7", "42abc", "1e2", "- 5"] {
            assert!(
                matches!(Guess::parse(raw), Err(GuessError::NotWholeNumber { .. })),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_input() {
        for raw in ["0", "101", "-5", "256", "99999999999999999999999"] {
            assert!(
                matches!(Guess::parse(raw), Err(GuessError::OutOfRange { .. })),
                "{raw:?} should be out of range"
            );
        }
    }

    #[test]
    fn new_checks_range() {
        assert!(Guess::new(0).is_err());
        assert!(Guess::new(50).is_ok());
        assert!(Guess::new(101).is_err());
    }

    #[test]
    fn deserialize_enforces_range() {
        let ok: Guess = serde_json::from_str("64").unwrap();
        assert_eq!(ok.value(), 64);
        assert!(serde_json::from_str::<Guess>("0").is_err());
        assert!(serde_json::from_str::<Guess>("200").is_err());
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = Guess::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a whole number");
    }
}
