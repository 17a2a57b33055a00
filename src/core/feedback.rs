//! Feedback handed back to front ends after a submission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown when input is not a valid guess.
pub const INVALID_GUESS_TEXT: &str = "please enter a valid number between 1 and 100";

/// Text shown when the guess is below the target.
pub const TOO_LOW_TEXT: &str = "too low";

/// Text shown when the guess is above the target.
pub const TOO_HIGH_TEXT: &str = "too high";

/// How a front end should present a feedback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Info,
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged message describing the outcome of one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn new(kind: FeedbackKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn invalid_guess() -> Self {
        Self::new(FeedbackKind::Error, INVALID_GUESS_TEXT)
    }

    pub fn too_low() -> Self {
        Self::new(FeedbackKind::Info, TOO_LOW_TEXT)
    }

    pub fn too_high() -> Self {
        Self::new(FeedbackKind::Info, TOO_HIGH_TEXT)
    }

    /// Success message for a round won after `attempts` valid guesses.
    pub fn solved(attempts: usize) -> Self {
        let noun = if attempts > 1 { "attempts" } else { "attempt" };
        Self::new(
            FeedbackKind::Success,
            format!("correct, solved in {attempts} {noun}"),
        )
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
