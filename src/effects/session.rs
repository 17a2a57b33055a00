//! Session shell that draws rounds and applies submissions.

use crate::core::{Feedback, FeedbackKind, GameState, GameView, Guess, Target, TargetSource};
use chrono::Utc;
use log::{debug, info, trace};
use std::sync::{Arc, Mutex};
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Errors raised by the session shell.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Target source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("No round has been started")]
    NoRound,
}

/// Environment that session effects run in.
///
/// Holds the target source behind a shared lock so the environment is
/// `Clone + Send + Sync`.
pub struct SessionEnv<T> {
    source: Arc<Mutex<T>>,
}

impl<T> Clone for SessionEnv<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: TargetSource> SessionEnv<T> {
    pub fn new(source: T) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// Draw the next target from the shared source.
    pub fn draw_target(&self) -> Result<Target, SessionError> {
        self.with_source(|source| source.next_target())
    }

    /// Run `f` with exclusive access to the source.
    pub fn with_source<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, SessionError> {
        let mut source = self
            .source
            .lock()
            .map_err(|err| SessionError::SourceUnavailable(err.to_string()))?;
        Ok(f(&mut source))
    }
}

/// Effect that draws a fresh round from the environment's target source.
/// Run it, then hand the result to [`Session::begin`].
pub fn draw_round<T>() -> impl Effect<Output = GameState, Error = SessionError, Env = SessionEnv<T>>
where
    T: TargetSource + Send + 'static,
{
    from_fn(|env: &SessionEnv<T>| env.draw_target()).map(GameState::new)
}

/// The running game: the current round plus per-process counters.
///
/// Counters live only as long as the session; nothing is persisted.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<GameState>,
    rounds_started: usize,
    rounds_solved: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a round from `env` and make it current. Used for both the first
    /// round and every reset.
    pub async fn start_round<T>(&mut self, env: &SessionEnv<T>) -> Result<&GameState, SessionError>
    where
        T: TargetSource + Send + 'static,
    {
        let round = draw_round::<T>().run(env).await?;
        Ok(self.begin(round))
    }

    /// Install `round` as the current round, replacing any previous one.
    pub fn begin(&mut self, round: GameState) -> &GameState {
        if let Some(previous) = &self.current {
            if !previous.is_over() {
                info!(
                    "Round {} abandoned after {} attempts",
                    previous.round_id(),
                    previous.attempts()
                );
            }
        }

        info!("Round {} started", round.round_id());
        trace!("Round {} target is {}", round.round_id(), round.target());
        self.rounds_started += 1;
        self.current.insert(round)
    }

    /// Submit raw input to the current round.
    ///
    /// Returns `Ok(None)` when the round is already over.
    pub fn submit(&mut self, raw: &str) -> Result<Option<Feedback>, SessionError> {
        let current = self.current.as_ref().ok_or(SessionError::NoRound)?;
        let round_id = current.round_id();

        let parsed = Guess::parse(raw);
        if current.is_over() {
            debug!("Round {round_id} is over, ignoring {raw:?}");
        } else if let Err(err) = &parsed {
            debug!("Round {round_id} rejected input: {err}");
        }

        let (next, feedback) = current.submit_parsed(parsed, Utc::now());

        if let Some(feedback) = &feedback {
            match feedback.kind {
                FeedbackKind::Success => {
                    info!("Round {round_id} solved in {} attempts", next.attempts());
                    self.rounds_solved += 1;
                }
                FeedbackKind::Info => {
                    debug!("Round {round_id} attempt {}: {feedback}", next.attempts());
                }
                FeedbackKind::Error => {}
            }
        }

        self.current = Some(next);
        Ok(feedback)
    }

    /// Get current round (pure)
    pub fn current(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// Front-end projection of the current round.
    pub fn view(&self) -> Option<GameView> {
        self.current.as_ref().map(GameState::view)
    }

    pub fn rounds_started(&self) -> usize {
        self.rounds_started
    }

    pub fn rounds_solved(&self) -> usize {
        self.rounds_solved
    }
}
