//! Numguess: a number-guessing game as a pure state machine
//!
//! Numguess follows a "pure core, imperative shell" layout. The round state
//! and its transitions are pure functions with no side effects; randomness,
//! logging and I/O live in the shell around them.
//!
//! # Core Concepts
//!
//! - **GameState**: One round - secret target, guess history, last feedback
//! - **Feedback**: Tagged message (`info` / `success` / `error`) per submission
//! - **TargetSource**: Injected randomness, so rounds are reproducible
//! - **Session**: The shell that draws rounds and applies submissions
//!
//! # Example
//!
//! ```rust
//! use numguess::core::{FeedbackKind, GameState, Target};
//!
//! let state = GameState::new(Target::new(50).unwrap());
//!
//! let (state, feedback) = state.submit("25");
//! assert_eq!(feedback.unwrap().text, "too low");
//!
//! let (state, feedback) = state.submit("75");
//! assert_eq!(feedback.unwrap().text, "too high");
//!
//! let (state, feedback) = state.submit("50");
//! let feedback = feedback.unwrap();
//! assert_eq!(feedback.kind, FeedbackKind::Success);
//! assert_eq!(feedback.text, "correct, solved in 3 attempts");
//!
//! // The round is over; further submissions change nothing.
//! let (after, feedback) = state.submit("10");
//! assert!(feedback.is_none());
//! assert_eq!(after, state);
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod terminal;

// Re-export commonly used types
pub use crate::config::{Config, ConfigError, Invocation, OutputFormat};
pub use crate::core::{Feedback, FeedbackKind, GameState, GameView, Guess, Target, TargetSource};
pub use crate::effects::{GameRng, Session, SessionEnv, SessionError};
