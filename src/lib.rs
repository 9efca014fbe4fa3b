//! # Fair RPS
//!
//! Rock-paper-scissors generalized to any odd number of moves, with the
//! computer's move committed by HMAC before the player chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIR RPS                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Pure game primitives                     │
//! │  ├── moves.rs     - Move set validation                      │
//! │  ├── outcome.rs   - Circular win/lose/draw resolution        │
//! │  ├── hash.rs      - HMAC-SHA256 keyed hashing                │
//! │  └── rng.rs       - Move picker and secret key source        │
//! │                                                              │
//! │  proof/           - Fairness protocol                        │
//! │  └── commitment.rs- Commit, reveal, verify                   │
//! │                                                              │
//! │  game/            - Player-facing flow                       │
//! │  ├── input.rs     - Prompt line parsing                      │
//! │  ├── help.rs      - Outcome table                            │
//! │  └── session.rs   - One round, start to reveal               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The HMAC is printed before the player is asked for a move. The key is
//! printed only after. Since the key is 256 bits from the OS CSPRNG, the
//! player cannot learn the move early, and the computer cannot find a
//! second key that makes a different move match the printed HMAC.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::core::moves::{MoveSet, MoveSetError};
pub use crate::core::outcome::{resolve, Outcome, RoundResult};
pub use game::session::{Session, SessionConfig, SessionError, SessionOutcome};
pub use proof::commitment::{verify_commitment, Commitment, MoveReveal};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
