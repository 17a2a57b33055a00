//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - Guess parsing and validation
//! - The secret target and the `TargetSource` seam
//! - Immutable guess history
//! - Round state and its transitions
//!
//! Nothing in this module logs, draws randomness or performs I/O. Randomness
//! arrives through `TargetSource`, supplied by the caller.

mod feedback;
mod guess;
mod history;
mod state;
mod target;

pub use feedback::{Feedback, FeedbackKind, INVALID_GUESS_TEXT, TOO_HIGH_TEXT, TOO_LOW_TEXT};
pub use guess::{Guess, GuessError, MAX_GUESS, MIN_GUESS};
pub use history::{GuessHistory, GuessRecord, Outcome};
pub use state::{new_round, reset, submit_guess, GameState, GameView, RoundPhase};
pub use target::{Target, TargetSource, TARGET_RANGE};
