//! Core game primitives.
//!
//! Pure data and functions: move sets, outcome resolution, keyed hashing
//! and the two random sources. No I/O happens here.

pub mod hash;
pub mod moves;
pub mod outcome;
pub mod rng;

// Re-export core types
pub use hash::{keyed_hash, KeyedHash, KEY_LEN};
pub use moves::{MoveSet, MoveSetError};
pub use outcome::{resolve, Outcome, RoundResult};
pub use rng::MoveRng;
