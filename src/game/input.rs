//! Input Parsing
//!
//! Turns one line typed at the move prompt into a [`Command`].

use thiserror::Error;

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave without playing.
    Exit,
    /// Show the outcome table.
    Help,
    /// Play the move at this 0-based index.
    Play(usize),
}

/// Rejected input. Recoverable: the prompt is shown again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Not a number.
    #[error("'{0}' is not a move number")]
    InvalidInputFormat(String),

    /// A number, but no such move.
    #[error("move {value} is outside 1..={max}")]
    OutOfRange {
        /// Number entered.
        value: i64,
        /// Highest valid move number.
        max: usize,
    },
}

/// Parse a line for a game with `move_count` moves.
///
/// Surrounding whitespace is ignored. Move numbers are 1-based.
pub fn parse_command(line: &str, move_count: usize) -> Result<Command, InputError> {
    let input = line.trim();

    if input == "0" {
        return Ok(Command::Exit);
    }
    if input == "?" || input.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }

    let value: i64 = input
        .parse()
        .map_err(|_| InputError::InvalidInputFormat(input.to_string()))?;

    if value < 1 || value as u64 > move_count as u64 {
        return Err(InputError::OutOfRange { value, max: move_count });
    }

    Ok(Command::Play(value as usize - 1))
}
