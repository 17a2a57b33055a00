use anyhow::{Context, Result};
use log::info;
use numguess::config::{Config, Invocation, USAGE};
use numguess::effects::{GameRng, Session, SessionEnv};
use numguess::terminal::{self, COMMANDS};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1))
        .context("Invalid command line, see --help")?
    {
        Invocation::Help => {
            println!("{USAGE}\n\n{COMMANDS}");
            return Ok(());
        }
        Invocation::Run(config) => config,
    };

    let rng = match (&config.resume, config.seed) {
        (Some(state), _) => GameRng::from_state(state),
        (None, Some(seed)) => GameRng::new(seed),
        (None, None) => GameRng::from_entropy(),
    };
    info!("Drawing targets from {}", rng.state());

    let env = SessionEnv::new(rng);
    let mut session = Session::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    terminal::run(stdin.lock(), stdout.lock(), config.output, &mut session, &env)
        .await
        .context("Terminal session failed")?;

    let resume = env.with_source(|rng| rng.state())?;
    info!("Continue these rounds with --resume {resume}");
    Ok(())
}
