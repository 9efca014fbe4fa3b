//! Outcome Resolution
//!
//! Moves sit on a cycle of length `n`. Going round the cycle, each move beats
//! the `(n - 1) / 2` moves before it and loses to the `(n - 1) / 2` after it.
//! With three moves this is plain rock-paper-scissors.

use serde::{Deserialize, Serialize};

/// Result of one pairing, from the human's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Same move.
    Draw,
    /// Human wins.
    Win,
    /// Human loses.
    Lose,
}

impl Outcome {
    /// Short label used in the help table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }

    /// Line printed at the end of a round.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Draw => "Draw!",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
        }
    }

    /// Outcome seen from the other side.
    pub fn reversed(self) -> Self {
        match self {
            Self::Draw => Self::Draw,
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
        }
    }
}

/// Summary of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Human's move (0-based).
    pub human_move: usize,
    /// Computer's move (0-based).
    pub computer_move: usize,
    /// Outcome for the human.
    pub outcome: Outcome,
}

impl RoundResult {
    /// Resolve a round over `n` moves.
    pub fn new(human_move: usize, computer_move: usize, n: usize) -> Self {
        Self {
            human_move,
            computer_move,
            outcome: resolve(human_move, computer_move, n),
        }
    }
}

/// Decide the outcome for `human` against `computer` over `n` moves.
///
/// # Panics
/// Panics if `n` is even or either index is out of range. Validated move
/// sets and parsed input never produce those.
pub fn resolve(human: usize, computer: usize, n: usize) -> Outcome {
    assert!(n % 2 == 1, "move count must be odd, got {}", n);
    assert!(human < n, "human move {} out of range for {} moves", human, n);
    assert!(computer < n, "computer move {} out of range for {} moves", computer, n);

    if human == computer {
        return Outcome::Draw;
    }

    // Distance in [1, n-1]; zero was handled above
    let distance = (human + n - computer) % n;
    if distance <= n / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
