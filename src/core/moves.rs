//! Move Set Validation
//!
//! A move set is the ordered list of move names given at startup.
//! Order matters: neighbouring indices (wrapping around) decide who beats whom.

use std::collections::BTreeSet;
use thiserror::Error;

use super::outcome::{resolve, Outcome};

/// Smallest playable move set.
pub const MIN_MOVES: usize = 3;

/// Move set validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Count is even or below the minimum.
    #[error("You must provide an odd number of unique moves, at least 3 (got {count}).")]
    InvalidMoveCount {
        /// Number of moves supplied.
        count: usize,
    },

    /// The same name appears twice.
    #[error("Moves must be unique ('{name}' appears more than once).")]
    DuplicateMoves {
        /// First repeated name.
        name: String,
    },
}

/// Validated, immutable list of move names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate raw move tokens.
    ///
    /// Count is checked before uniqueness.
    pub fn new<I, S>(tokens: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = tokens.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES || names.len() % 2 == 0 {
            return Err(MoveSetError::InvalidMoveCount { count: names.len() });
        }

        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMoves { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; a valid set has at least three moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Name at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Iterate names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of moves each move beats: `(n - 1) / 2`.
    #[inline]
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// Outcome for the player holding `human` against `computer`.
    pub fn outcome(&self, human: usize, computer: usize) -> Outcome {
        resolve(human, computer, self.len())
    }
}
