//! Round state and its transitions.
//!
//! A [`GameState`] is an immutable value. Submitting a guess returns a new
//! state instead of mutating the old one, and a reset replaces the state
//! wholesale.

use super::feedback::Feedback;
use super::guess::{Guess, GuessError, MAX_GUESS, MIN_GUESS};
use super::history::{GuessHistory, GuessRecord, Outcome};
use super::target::{Target, TargetSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Guesses are still accepted.
    Guessing,
    /// The target was hit; submissions are ignored until reset.
    Solved,
}

impl RoundPhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Guessing => "Guessing",
            Self::Solved => "Solved",
        }
    }

    /// Check if this is a terminal phase.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// State of one round of the guessing game.
///
/// The attempt count is derived from the history, so the two can never
/// disagree.
///
/// # Example
///
/// ```rust
/// use numguess::core::{FeedbackKind, GameState, Target};
///
/// let state = GameState::new(Target::new(50).unwrap());
///
/// let (state, feedback) = state.submit("25");
/// assert_eq!(feedback.unwrap().text, "too low");
///
/// let (state, feedback) = state.submit("50");
/// assert_eq!(feedback.unwrap().kind, FeedbackKind::Success);
/// assert!(state.is_over());
/// assert_eq!(state.guesses(), vec![25, 50]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    round_id: Uuid,
    target: Target,
    history: GuessHistory,
    last_feedback: Option<Feedback>,
    started_at: DateTime<Utc>,
}

impl GameState {
    /// Start a round against a known target.
    pub fn new(target: Target) -> Self {
        Self {
            round_id: Uuid::new_v4(),
            target,
            history: GuessHistory::new(),
            last_feedback: None,
            started_at: Utc::now(),
        }
    }

    /// Start a round with a target drawn from `source`.
    pub fn new_round<S: TargetSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.next_target())
    }

    /// Replace this round with a fresh one. Same contract as [`Self::new_round`].
    pub fn reset<S: TargetSource + ?Sized>(&self, source: &mut S) -> Self {
        Self::new_round(source)
    }

    /// Submit raw user input, stamping any accepted guess with the current time.
    ///
    /// See [`Self::submit_at`].
    pub fn submit(&self, raw: &str) -> (Self, Option<Feedback>) {
        self.submit_at(raw, Utc::now())
    }

    /// Submit raw user input.
    ///
    /// - Once the round is over the state comes back unchanged with no feedback.
    /// - Invalid input leaves target and history untouched and yields error
    ///   feedback.
    /// - A valid guess is appended to the history; hitting the target ends the
    ///   round.
    pub fn submit_at(&self, raw: &str, now: DateTime<Utc>) -> (Self, Option<Feedback>) {
        self.submit_parsed(Guess::parse(raw), now)
    }

    /// Apply input that was already run through [`Guess::parse`], for callers
    /// that also want the [`GuessError`] classification.
    pub fn submit_parsed(
        &self,
        parsed: Result<Guess, GuessError>,
        now: DateTime<Utc>,
    ) -> (Self, Option<Feedback>) {
        if self.is_over() {
            return (self.clone(), None);
        }

        let guess = match parsed {
            Ok(guess) => guess,
            Err(_) => {
                let feedback = Feedback::invalid_guess();
                let next = Self {
                    last_feedback: Some(feedback.clone()),
                    ..self.clone()
                };
                return (next, Some(feedback));
            }
        };

        let outcome = Outcome::judge(guess, self.target);
        let history = self.history.record(GuessRecord {
            guess,
            outcome,
            timestamp: now,
            attempt: self.attempts() + 1,
        });
        let feedback = outcome.feedback(history.len());

        let next = Self {
            history,
            last_feedback: Some(feedback.clone()),
            ..self.clone()
        };
        (next, Some(feedback))
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    /// The secret target. Front ends should render [`Self::view`] instead.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Number of valid guesses so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Guessed values in submission order.
    pub fn guesses(&self) -> Vec<u8> {
        self.history.values()
    }

    pub fn is_over(&self) -> bool {
        self.history.is_solved()
    }

    pub fn phase(&self) -> RoundPhase {
        if self.is_over() {
            RoundPhase::Solved
        } else {
            RoundPhase::Guessing
        }
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Project the state for a front end, hiding the target.
    pub fn view(&self) -> GameView {
        GameView {
            round_id: self.round_id,
            attempts: self.attempts(),
            history: self.guesses(),
            game_over: self.is_over(),
            message: self.last_feedback.clone(),
            min: MIN_GUESS,
            max: MAX_GUESS,
        }
    }
}

/// What a front end is allowed to see of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub round_id: Uuid,
    pub attempts: usize,
    pub history: Vec<u8>,
    pub game_over: bool,
    pub message: Option<Feedback>,
    pub min: u8,
    pub max: u8,
}

/// Start a round with a target drawn from `source`.
pub fn new_round<S: TargetSource + ?Sized>(source: &mut S) -> GameState {
    GameState::new_round(source)
}

/// Apply one submission to `state`. See [`GameState::submit_at`].
pub fn submit_guess(state: &GameState, raw: &str) -> (GameState, Option<Feedback>) {
    state.submit(raw)
}

/// Start over with a fresh target. Same contract as [`new_round`].
pub fn reset<S: TargetSource + ?Sized>(source: &mut S) -> GameState {
    GameState::new_round(source)
}
