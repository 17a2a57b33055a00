//! Line-oriented terminal front end.
//!
//! Reads one command per line, dispatches it to the [`Session`] and prints
//! the result. The input line is discarded after every submission, valid or
//! not, so a rejected guess has to be retyped. Lines that are not valid
//! UTF-8 are treated like any other unparsable guess.

mod command;
mod render;

pub use command::Command;
pub use render::Renderer;

use crate::config::OutputFormat;
use crate::core::TargetSource;
use crate::effects::{Session, SessionEnv, SessionError};
use log::info;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Commands available while playing.
pub const COMMANDS: &str = "\
commands:
  <number>       submit a guess
  new | reset    start a new round
  history        show the guesses so far
  help           show the commands
  quit | exit    leave the game";

/// Errors that end a terminal session.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Play until `input` is exhausted or the user quits.
///
/// A first round is started before the first line is read.
pub async fn run<R, W, T>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
    session: &mut Session,
    env: &SessionEnv<T>,
) -> Result<(), TerminalError>
where
    R: BufRead,
    W: Write,
    T: TargetSource + Send + 'static,
{
    let renderer = Renderer::new(format);
    let text = format == OutputFormat::Text;

    let view = session.start_round(env).await?.view();
    writeln!(output, "{}", renderer.round_started(&view)?)?;
    if text {
        writeln!(output, "Type `help` for commands.")?;
    }

    let mut line = Vec::new();
    loop {
        if text {
            write!(output, "> ")?;
        }
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD and the line is rejected as a guess.
        match Command::parse(&String::from_utf8_lossy(&line)) {
            Command::Guess(raw) => {
                let feedback = session.submit(&raw)?;
                let view = session.view().ok_or(SessionError::NoRound)?;
                writeln!(output, "{}", renderer.update(&view, feedback.as_ref())?)?;
            }
            Command::Reset => {
                let view = session.start_round(env).await?.view();
                writeln!(output, "{}", renderer.round_started(&view)?)?;
            }
            Command::History => {
                let view = session.view().ok_or(SessionError::NoRound)?;
                writeln!(output, "{}", renderer.history(&view)?)?;
            }
            Command::Help if text => writeln!(output, "{COMMANDS}")?,
            Command::Help => {}
            Command::Quit => break,
        }
    }

    output.flush()?;
    info!(
        "Session ended: {} rounds started, {} solved",
        session.rounds_started(),
        session.rounds_solved()
    );
    Ok(())
}
