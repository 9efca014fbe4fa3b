//! Keyed Hashing for Move Commitments
//!
//! HMAC-SHA256 over a move name, keyed by the round's secret key.
//! The digest is what the player sees before choosing; the key is
//! published afterwards so the digest can be recomputed.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Secret key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Keyed hash output type (256 bits / 32 bytes)
pub type KeyedHash = [u8; 32];

type HmacSha256 = Hmac<Sha256>;

fn mac_for(key: &[u8]) -> HmacSha256 {
    match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        // HMAC pads or hashes the key, so every length is accepted.
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}

/// Compute HMAC-SHA256 of `message` under `key`.
pub fn keyed_hash(key: &[u8], message: &[u8]) -> KeyedHash {
    let mut mac = mac_for(key);
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Check `expected` against the HMAC of `message` under `key`.
///
/// The comparison runs in constant time.
pub fn verify_keyed_hash(key: &[u8], message: &[u8], expected: &[u8]) -> bool {
    let mut mac = mac_for(key);
    mac.update(message);
    mac.verify_slice(expected).is_ok()
}

/// Render a digest or key as lowercase hex.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_vector() {
        // RFC 4231, test case 2
        let digest = keyed_hash(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            to_hex(&digest),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hex_is_lowercase_and_full_length() {
        let digest = keyed_hash(&[0xAB; KEY_LEN], b"rock");
        let rendered = to_hex(&digest);

        assert_eq!(rendered.len(), 64);
        assert_eq!(rendered, rendered.to_lowercase());
    }

    #[test]
    fn test_key_sensitivity() {
        let hash1 = keyed_hash(&[1; KEY_LEN], b"paper");
        let hash2 = keyed_hash(&[2; KEY_LEN], b"paper");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_message_sensitivity() {
        let key = [9; KEY_LEN];

        assert_ne!(keyed_hash(&key, b"paper"), keyed_hash(&key, b"Paper"));
    }

    #[test]
    fn test_verify_keyed_hash() {
        let key = [3; KEY_LEN];
        let digest = keyed_hash(&key, b"lizard");

        assert!(verify_keyed_hash(&key, b"lizard", &digest));
        assert!(!verify_keyed_hash(&key, b"spock", &digest));
        assert!(!verify_keyed_hash(&[4; KEY_LEN], b"lizard", &digest));
        assert!(!verify_keyed_hash(&key, b"lizard", &digest[..31]));
    }
}
