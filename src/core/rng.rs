//! Random Sources
//!
//! Two deliberately separate generators:
//! - [`MoveRng`]: fast non-cryptographic generator used to pick the
//!   computer's move. Only the distribution matters here, not secrecy.
//! - [`generate_secret_key`]: draws the commitment key from a
//!   cryptographically secure source (the OS RNG in production).

use rand::rngs::SmallRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use super::hash::KEY_LEN;

/// Move picker backed by [`SmallRng`].
///
/// Seedable so a round can be reproduced in tests.
///
/// # Example
///
/// ```
/// use fair_rps::core::rng::MoveRng;
///
/// let mut a = MoveRng::new(12345);
/// let mut b = MoveRng::new(12345);
/// assert_eq!(a.next_index(5), b.next_index(5));
/// ```
#[derive(Clone, Debug)]
pub struct MoveRng {
    inner: SmallRng,
}

impl MoveRng {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from system entropy.
    ///
    /// Not suitable for secrets; see [`generate_secret_key`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    /// Uniformly distributed index in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn next_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }
}

/// Draw a secret key from a cryptographically secure generator.
pub fn generate_secret_key<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rng.fill_bytes(&mut key);
    key
}

// =============================================================================
// TESTS
// =============================================================================
