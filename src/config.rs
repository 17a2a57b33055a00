//! Command-line configuration for the terminal front end.
//!
//! Log verbosity is not configured here; `env_logger` reads `RUST_LOG`.

use crate::effects::GameRngState;
use thiserror::Error;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
usage: numguess [--seed <u64> | --resume <seed>:<pos>] [--json] [--help]

Guess the secret number between 1 and 100.

options:
  --seed <u64>   draw targets from a fixed seed (reproducible rounds)
  --resume <seed>:<pos>
                 continue a seeded run from the position logged at exit
  --json         print one JSON object per update instead of text
  -h, --help     print this message

Set RUST_LOG=debug to log every submission to stderr.";

/// How updates are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Errors from parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Option {flag} requires a value")]
    MissingValue { flag: String },

    #[error("Invalid seed '{value}': expected an unsigned 64-bit integer")]
    InvalidSeed { value: String },

    #[error("Invalid resume point '{value}': expected <seed>:<position>")]
    InvalidResume { value: String },

    #[error("Options --seed and --resume cannot be combined")]
    ConflictingSeed,

    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed for the target RNG; drawn from entropy when absent
    pub seed: Option<u64>,
    /// RNG position to continue from; takes the place of `seed`
    pub resume: Option<GameRngState>,
    pub output: OutputFormat,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, A>(args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "--json" => config.output = OutputFormat::Json,
                "--seed" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: "--seed".to_string(),
                    })?;
                    config.seed = Some(parse_seed(&value)?);
                }
                "--resume" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: "--resume".to_string(),
                    })?;
                    config.resume = Some(parse_resume(&value)?);
                }
                other => {
                    if let Some(value) = other.strip_prefix("--seed=") {
                        config.seed = Some(parse_seed(value)?);
                    } else if let Some(value) = other.strip_prefix("--resume=") {
                        config.resume = Some(parse_resume(value)?);
                    } else {
                        return Err(ConfigError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        if config.seed.is_some() && config.resume.is_some() {
            return Err(ConfigError::ConflictingSeed);
        }

        Ok(Invocation::Run(config))
    }
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidSeed {
        value: value.to_string(),
    })
}

fn parse_resume(value: &str) -> Result<GameRngState, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidResume {
        value: value.to_string(),
    })
}
