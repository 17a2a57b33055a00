//! Text and JSON-lines rendering of round views.

use crate::config::OutputFormat;
use crate::core::{Feedback, GameView};
use serde::Serialize;

/// One line of JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum JsonEvent<'a> {
    RoundStarted { view: &'a GameView },
    Update { view: &'a GameView, ignored: bool },
    History { view: &'a GameView },
}

/// Renders views in the configured format.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Announce a freshly started round.
    pub fn round_started(&self, view: &GameView) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(format!(
                "New round: guess the secret number between {} and {}.",
                view.min, view.max
            )),
            OutputFormat::Json => serde_json::to_string(&JsonEvent::RoundStarted { view }),
        }
    }

    /// Show the result of one submission. `feedback` is `None` when the round
    /// was already over and the submission was ignored.
    pub fn update(
        &self,
        view: &GameView,
        feedback: Option<&Feedback>,
    ) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(match feedback {
                Some(feedback) => {
                    let mut out = format!("[{}] {}", feedback.kind, feedback.text);
                    if !view.history.is_empty() && !feedback.is_success() {
                        out.push('\n');
                        out.push_str(&history_line(view));
                    }
                    if feedback.is_success() {
                        out.push_str("\nType `new` to play again.");
                    }
                    out
                }
                None => "This round is over. Type `new` to play again.".to_string(),
            }),
            OutputFormat::Json => serde_json::to_string(&JsonEvent::Update {
                view,
                ignored: feedback.is_none(),
            }),
        }
    }

    /// Show the guesses so far.
    pub fn history(&self, view: &GameView) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text if view.history.is_empty() => Ok("No guesses yet.".to_string()),
            OutputFormat::Text => Ok(history_line(view)),
            OutputFormat::Json => serde_json::to_string(&JsonEvent::History { view }),
        }
    }
}

fn history_line(view: &GameView) -> String {
    let guesses: Vec<String> = view.history.iter().map(u8::to_string).collect();
    format!(
        "Your guesses so far ({}): {}",
        view.attempts,
        guesses.join(", ")
    )
}
