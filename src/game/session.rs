//! Round Session
//!
//! Drives one round over an input line source and an output sink:
//! publish the commitment, read the player's choice, resolve, reveal.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::moves::MoveSet;
use crate::core::outcome::RoundResult;
use crate::game::help::{write_help_table, TableLayout};
use crate::game::input::{parse_command, Command};
use crate::proof::commitment::{Commitment, MoveReveal};

/// Printed after a rejected line.
pub const INVALID_MOVE_MESSAGE: &str =
    "Invalid move. Please enter a valid number corresponding to your move.";

/// Printed when the player picks `0`.
pub const EXIT_MESSAGE: &str = "You exit the game";

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, commitment not yet published.
    Start,
    /// Commitment and menu shown.
    Committed,
    /// Waiting for a valid line.
    AwaitingInput,
    /// Player's move accepted.
    Resolved,
    /// Round finished and key revealed.
    Done,
    /// Player left before choosing.
    Exited,
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Prompt shown before each line is read.
    pub prompt: String,
    /// Help table column widths.
    pub table: TableLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter your move: ".to_string(),
            table: TableLayout::default(),
        }
    }
}

/// How the round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player chose `0`; nothing was resolved or revealed.
    Exited,
    /// Round played to the end.
    Played {
        /// Moves and outcome.
        result: RoundResult,
        /// Opened commitment.
        reveal: MoveReveal,
    },
}

/// Session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Console read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended before a move was chosen.
    #[error("input closed before a move was chosen")]
    InputClosed,
}

/// One round of play.
pub struct Session<'a, I, O> {
    moves: &'a MoveSet,
    config: SessionConfig,
    input: I,
    output: O,
    state: SessionState,
}

impl<'a, I: BufRead, O: Write> Session<'a, I, O> {
    /// Create a session over `moves`.
    pub fn new(moves: &'a MoveSet, input: I, output: O) -> Self {
        Self {
            moves,
            config: SessionConfig::default(),
            input,
            output,
            state: SessionState::Start,
        }
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Give back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
    }

    /// Play the round against `commitment`.
    pub fn play(&mut self, commitment: Commitment) -> Result<SessionOutcome, SessionError> {
        self.publish(&commitment)?;
        self.transition(SessionState::AwaitingInput);

        let human_move = loop {
            let line = self.read_line()?;
            match parse_command(&line, self.moves.len()) {
                Ok(Command::Exit) => {
                    writeln!(self.output, "{}", EXIT_MESSAGE)?;
                    self.output.flush()?;
                    self.transition(SessionState::Exited);
                    info!("player exited before choosing");
                    return Ok(SessionOutcome::Exited);
                }
                Ok(Command::Help) => {
                    write_help_table(&mut self.output, self.moves, &self.config.table)?;
                }
                Ok(Command::Play(index)) => break index,
                Err(err) => {
                    debug!(%err, "rejected input");
                    writeln!(self.output, "{}", INVALID_MOVE_MESSAGE)?;
                }
            }
        };

        self.transition(SessionState::Resolved);
        self.resolve(human_move, commitment)
    }

    fn publish(&mut self, commitment: &Commitment) -> Result<(), SessionError> {
        writeln!(self.output, "HMAC: {}", commitment.hash_hex())?;
        writeln!(self.output, "Available moves:")?;
        for (i, name) in self.moves.iter().enumerate() {
            writeln!(self.output, "{} - {}", i + 1, name)?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        self.transition(SessionState::Committed);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;

        // Raw bytes: a non-UTF-8 line is rejected by parsing, not by I/O
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn resolve(&mut self, human_move: usize, commitment: Commitment) -> Result<SessionOutcome, SessionError> {
        let reveal = commitment.reveal();
        let result = RoundResult::new(human_move, reveal.move_index, self.moves.len());

        writeln!(self.output, "Your move: {}", self.moves.name(human_move))?;
        writeln!(self.output, "Computer move: {}", reveal.move_name)?;
        writeln!(self.output, "{}", result.outcome.announcement())?;
        writeln!(self.output, "HMAC key: {}", reveal.key)?;
        self.output.flush()?;

        info!(outcome = ?result.outcome, key = %reveal.key, "round finished");
        self.transition(SessionState::Done);

        Ok(SessionOutcome::Played { result, reveal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::KEY_LEN;
    use crate::core::outcome::Outcome;
    use std::io::Cursor;

    fn rps() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors"]).unwrap()
    }

    fn rpsls() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap()
    }

    fn run(
        moves: &MoveSet,
        computer: usize,
        script: impl AsRef<[u8]>,
    ) -> (Result<SessionOutcome, SessionError>, String, SessionState) {
        let commitment = Commitment::with_key(moves, computer, [7; KEY_LEN]);
        let mut session = Session::new(moves, Cursor::new(script.as_ref().to_vec()), Vec::new());
        let outcome = session.play(commitment);
        let state = session.state();
        let output = String::from_utf8(session.into_output()).unwrap();
        (outcome, output, state)
    }

    #[test]
    fn test_menu_lists_moves() {
        let moves = rps();
        let (_, output, _) = run(&moves, 0, "0\n");
        let published = Commitment::with_key(&moves, 0, [7; KEY_LEN]).hash_hex();

        assert!(output.starts_with(&format!("HMAC: {}\nAvailable moves:\n", published)));
        assert!(output.contains("1 - rock\n2 - paper\n3 - scissors\n0 - exit\n? - help\n"));
    }

    #[test]
    fn test_three_move_win() {
        let (outcome, output, state) = run(&rps(), 1, "3\n");

        let SessionOutcome::Played { result, reveal } = outcome.unwrap() else {
            panic!("round should have been played");
        };
        assert_eq!(result.human_move, 2);
        assert_eq!(result.computer_move, 1);
        assert_eq!(result.outcome, Outcome::Win);
        assert!(reveal.verify().is_ok());
        assert!(output.contains("Your move: scissors\nComputer move: paper\nYou win!\n"));
        assert!(output.contains(&format!("HMAC key: {}\n", "07".repeat(KEY_LEN))));
        assert_eq!(state, SessionState::Done);
    }

    #[test]
    fn test_five_move_loss() {
        let (outcome, output, _) = run(&rpsls(), 2, "1\n");

        assert!(matches!(
            outcome.unwrap(),
            SessionOutcome::Played { result: RoundResult { outcome: Outcome::Lose, .. }, .. }
        ));
        assert!(output.contains("Your move: rock\nComputer move: scissors\nYou lose!\n"));
    }

    #[test]
    fn test_draw() {
        let (_, output, _) = run(&rps(), 0, "1\n");
        assert!(output.contains("Draw!\n"));
    }

    #[test]
    fn test_exit_prints_no_outcome() {
        let (outcome, output, state) = run(&rpsls(), 3, "0\n");

        assert_eq!(outcome.unwrap(), SessionOutcome::Exited);
        assert_eq!(state, SessionState::Exited);
        assert!(output.ends_with(&format!("Enter your move: {}\n", EXIT_MESSAGE)));
        assert!(!output.contains("Your move:"));
        assert!(!output.contains("HMAC key:"));
        assert!(!output.contains("win"));
        assert!(!output.contains("lose"));
        assert!(!output.contains("Draw!"));
    }

    #[test]
    fn test_invalid_input_reprompts_with_same_commitment() {
        let moves = rpsls();
        let (outcome, output, _) = run(&moves, 4, "abc\n9\n \n5\n");

        assert_eq!(output.matches(INVALID_MOVE_MESSAGE).count(), 3);
        assert_eq!(output.matches("Enter your move: ").count(), 4);

        let SessionOutcome::Played { result, reveal } = outcome.unwrap() else {
            panic!("round should have been played");
        };
        assert_eq!(result.computer_move, 4);
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(reveal.hash, Commitment::with_key(&moves, 4, [7; KEY_LEN]).hash_hex());
    }

    #[test]
    fn test_non_utf8_line_reprompts() {
        let (outcome, output, state) = run(&rps(), 0, b"\xff\xfe\n1\n");

        assert_eq!(output.matches(INVALID_MOVE_MESSAGE).count(), 1);
        assert_eq!(output.matches("Enter your move: ").count(), 2);
        assert_eq!(state, SessionState::Done);

        let SessionOutcome::Played { result, reveal } = outcome.unwrap() else {
            panic!("round should have been played");
        };
        assert_eq!(result.computer_move, 0);
        assert_eq!(result.outcome, Outcome::Draw);
        assert!(reveal.verify().is_ok());
    }

    #[test]
    fn test_help_then_move() {
        let (outcome, output, _) = run(&rps(), 0, "?\nHelp\n2\n");

        assert_eq!(output.matches("| v User\\PC > |").count(), 2);
        assert!(matches!(outcome.unwrap(), SessionOutcome::Played { .. }));
        assert!(output.contains("You win!\n"));
    }

    #[test]
    fn test_exit_after_help_and_errors() {
        let (outcome, output, _) = run(&rps(), 0, "help\nfoo\n0\n");

        assert_eq!(outcome.unwrap(), SessionOutcome::Exited);
        assert!(output.contains(INVALID_MOVE_MESSAGE));
        assert!(!output.contains("HMAC key:"));
    }

    #[test]
    fn test_input_closed() {
        let (outcome, output, state) = run(&rps(), 0, "abc\n");

        assert!(matches!(outcome, Err(SessionError::InputClosed)));
        assert_eq!(state, SessionState::AwaitingInput);
        assert!(!output.contains("HMAC key:"));
    }

    #[test]
    fn test_custom_prompt() {
        let moves = rps();
        let config = SessionConfig {
            prompt: "> ".to_string(),
            ..SessionConfig::default()
        };
        let commitment = Commitment::with_key(&moves, 0, [1; KEY_LEN]);
        let mut session = Session::new(&moves, Cursor::new("0\n"), Vec::new()).with_config(config);

        session.play(commitment).unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("> You exit the game\n"));
        assert!(!output.contains("Enter your move"));
    }
}
