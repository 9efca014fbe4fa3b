//! Fairness Proof
//!
//! Commit-reveal over HMAC-SHA256:
//! - Before the player chooses, only the HMAC of the computer's move is shown.
//! - After the player chooses, the key is revealed.
//! - Anyone can recompute the HMAC from the key and the move name.

pub mod commitment;

// Re-export key types
pub use commitment::{verify_commitment, Commitment, CommitmentError, MoveReveal, SecretKey};
