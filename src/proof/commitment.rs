//! Move Commitment Protocol
//!
//! Commit to the computer's move before the player chooses.
//! Reveal the key afterwards so anyone can check the move was fixed.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::hash::{keyed_hash, to_hex, verify_keyed_hash, KeyedHash, KEY_LEN};
use crate::core::moves::MoveSet;
use crate::core::rng::{generate_secret_key, MoveRng};

/// Round secret. `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<hidden>)")
    }
}

/// The computer's committed move.
///
/// Only the hash is readable. The move and key come out through
/// [`Commitment::reveal`], which consumes the commitment, so the move
/// cannot be swapped between publishing the hash and revealing.
pub struct Commitment {
    secret_key: SecretKey,
    move_index: usize,
    move_name: String,
    hash: KeyedHash,
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("hash", &self.hash_hex())
            .finish_non_exhaustive()
    }
}

impl Commitment {
    /// Commit to `move_index` under a given key.
    ///
    /// # Panics
    /// Panics if `move_index` is out of range for `moves`.
    pub fn with_key(moves: &MoveSet, move_index: usize, key: [u8; KEY_LEN]) -> Self {
        let move_name = moves.name(move_index).to_string();
        let hash = keyed_hash(&key, move_name.as_bytes());
        Self {
            secret_key: SecretKey::new(key),
            move_index,
            move_name,
            hash,
        }
    }

    /// Pick a move with `move_rng` and a key with `key_rng`, then commit.
    pub fn commit<K: RngCore + CryptoRng>(
        moves: &MoveSet,
        move_rng: &mut MoveRng,
        key_rng: &mut K,
    ) -> Self {
        let move_index = move_rng.next_index(moves.len());
        let commitment = Self::with_key(moves, move_index, generate_secret_key(key_rng));
        debug!(hash = %commitment.hash_hex(), "commitment created");
        commitment
    }

    /// Commit using an entropy-seeded move picker and the OS key source.
    pub fn generate(moves: &MoveSet) -> Self {
        Self::commit(moves, &mut MoveRng::from_entropy(), &mut OsRng)
    }

    /// Published hash.
    pub fn hash(&self) -> &KeyedHash {
        &self.hash
    }

    /// Published hash as lowercase hex.
    pub fn hash_hex(&self) -> String {
        to_hex(&self.hash)
    }

    /// Open the commitment.
    pub fn reveal(self) -> MoveReveal {
        MoveReveal {
            move_index: self.move_index,
            move_name: self.move_name,
            key: self.secret_key.to_hex(),
            hash: to_hex(&self.hash),
        }
    }
}

/// Reveal record (published after the player has chosen).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReveal {
    /// Committed move (0-based).
    pub move_index: usize,

    /// Committed move name.
    pub move_name: String,

    /// Secret key, hex.
    pub key: String,

    /// Hash published before the player chose, hex.
    pub hash: String,
}

impl MoveReveal {
    /// Recompute the hash from the revealed key and move name.
    pub fn verify(&self) -> Result<(), CommitmentError> {
        verify_commitment(&self.hash, &self.key, &self.move_name)
    }
}

/// Errors that can occur during commitment verification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitmentError {
    /// Key or hash is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded key has the wrong size.
    #[error("key must be {expected} bytes, got {got}")]
    InvalidKeyLength {
        /// Required length.
        expected: usize,
        /// Decoded length.
        got: usize,
    },

    /// Recomputed hash differs from the published one.
    #[error("HMAC does not match the revealed key and move")]
    HashMismatch,
}

/// Check a published hash against a revealed key and move name.
pub fn verify_commitment(hash_hex: &str, key_hex: &str, move_name: &str) -> Result<(), CommitmentError> {
    let key = hex::decode(key_hex.trim())?;
    if key.len() != KEY_LEN {
        return Err(CommitmentError::InvalidKeyLength {
            expected: KEY_LEN,
            got: key.len(),
        });
    }
    let expected = hex::decode(hash_hex.trim())?;

    if verify_keyed_hash(&key, move_name.as_bytes(), &expected) {
        Ok(())
    } else {
        Err(CommitmentError::HashMismatch)
    }
}
