//! Effectful shell around the pure core, using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell": drawing random targets,
//! keeping the current round, and logging what happens to it.
//!
//! # Key Concepts
//!
//! - **Target sources**: Seeded or scripted suppliers of secret numbers
//! - **Session**: Holds the current round and applies submissions
//! - **Effects**: Round creation reads its randomness from a `SessionEnv`
//!   through Stillwater's effect system

mod session;
mod source;

pub use session::{draw_round, Session, SessionEnv, SessionError};
pub use source::{FixedTargets, GameRng, GameRngState, ParseRngStateError};
