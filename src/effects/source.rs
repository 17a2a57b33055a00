//! Target sources: where new rounds get their secret number.
//!
//! - [`GameRng`] is deterministic for a given seed and can be captured and
//!   restored, so a session can be replayed with `--seed`.
//! - [`FixedTargets`] cycles through a scripted list, for tests and demos.

use crate::core::{Target, TargetSource, TARGET_RANGE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deterministic RNG for drawing targets.
///
/// Uses ChaCha8 for speed; the game does not need cryptographic guarantees.
///
/// ```
/// use numguess::core::TargetSource;
/// use numguess::effects::GameRng;
///
/// let mut a = GameRng::new(7);
/// let mut b = GameRng::new(7);
/// assert_eq!(a.next_target(), b.next_target());
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a randomly chosen seed.
    ///
    /// The seed is still recorded so the run can be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl TargetSource for GameRng {
    fn next_target(&mut self) -> Target {
        Target::from_drawn(self.inner.gen_range(TARGET_RANGE))
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capturing is O(1) regardless of how
/// many targets have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Written as `<seed>:<word_pos>`, the form `--resume` accepts.
impl fmt::Display for GameRngState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seed, self.word_pos)
    }
}

/// Error parsing a [`GameRngState`] from `<seed>:<word_pos>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected <seed>:<position>, got '{0}'")]
pub struct ParseRngStateError(String);

impl FromStr for GameRngState {
    type Err = ParseRngStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRngStateError(s.to_string());
        let (seed, word_pos) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            seed: seed.parse().map_err(|_| invalid())?,
            word_pos: word_pos.parse().map_err(|_| invalid())?,
        })
    }
}

/// Cycles through a fixed, non-empty list of targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedTargets {
    targets: Vec<Target>,
    next: usize,
}

impl FixedTargets {
    /// Always yield `target`.
    pub fn single(target: Target) -> Self {
        Self {
            targets: vec![target],
            next: 0,
        }
    }

    /// Yield `targets` in order, wrapping around. `None` if the list is empty.
    pub fn cycle(targets: Vec<Target>) -> Option<Self> {
        if targets.is_empty() {
            None
        } else {
            Some(Self { targets, next: 0 })
        }
    }
}

impl TargetSource for FixedTargets {
    fn next_target(&mut self) -> Target {
        let target = self.targets[self.next];
        self.next = (self.next + 1) % self.targets.len();
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng, n: usize) -> Vec<u8> {
        (0..n).map(|_| rng.next_target().value()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(draw(&mut rng1, 100), draw(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(draw(&mut rng1, 20), draw(&mut rng2, 20));
    }

    #[test]
    fn test_targets_stay_in_range() {
        let mut rng = GameRng::new(9);
        for value in draw(&mut rng, 5_000) {
            assert!((1..=100).contains(&value));
        }
    }

    #[test]
    fn test_both_bounds_are_reachable() {
        let mut rng = GameRng::new(3);
        let values = draw(&mut rng, 5_000);

        assert!(values.contains(&1));
        assert!(values.contains(&100));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        draw(&mut rng, 50);

        let state = rng.state();
        let expected = draw(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(draw(&mut restored, 10), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_text_form() {
        let mut rng = GameRng::new(11);
        draw(&mut rng, 3);
        let state = rng.state();

        let parsed: GameRngState = state.to_string().parse().unwrap();
        assert_eq!(parsed, state);
        assert!("11".parse::<GameRngState>().is_err());
        assert!("11:x".parse::<GameRngState>().is_err());
        assert!("-1:0".parse::<GameRngState>().is_err());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        assert_eq!(original.next_target(), replay.next_target());
    }

    #[test]
    fn fixed_targets_cycle_in_order() {
        let targets = vec![Target::new(10).unwrap(), Target::new(20).unwrap()];
        let mut source = FixedTargets::cycle(targets).unwrap();

        let drawn: Vec<u8> = (0..5).map(|_| source.next_target().value()).collect();
        assert_eq!(drawn, vec![10, 20, 10, 20, 10]);
    }

    #[test]
    fn fixed_targets_reject_empty_list() {
        assert!(FixedTargets::cycle(Vec::new()).is_none());
    }
}
