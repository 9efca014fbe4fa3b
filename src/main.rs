//! Fair RPS
//!
//! Usage: `fair-rps <move> <move> <move> [...]`
//!
//! Plays one round against the computer. Logs and runtime errors go to
//! stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use fair_rps::{Commitment, MoveSet, Session, SessionOutcome, VERSION};

fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!("Fair RPS v{}", VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let moves = match MoveSet::new(args) {
        Ok(moves) => moves,
        Err(err) => {
            println!("Error: {}", err);
            println!("Example: fair-rps rock paper scissors");
            return ExitCode::FAILURE;
        }
    };

    match run(&moves) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(moves: &MoveSet) -> anyhow::Result<SessionOutcome> {
    let commitment = Commitment::generate(moves);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(moves, stdin.lock(), stdout.lock());

    session.play(commitment).context("game session failed")
}
