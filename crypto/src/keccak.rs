//! Keccak-256 hashing.

use sha3::{Digest, Keccak256};

/// Compute a 256-bit Keccak hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_empty_known_vector() {
        // Keccak-256(""), distinct from NIST SHA3-256("").
        let expected = "c5d2460186f7233c907e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
        assert_eq!(hex::encode(keccak256(b"")), expected);
    }

    #[test]
    fn keccak_deterministic() {
        assert_eq!(keccak256(b"cinder"), keccak256(b"cinder"));
    }

    #[test]
    fn keccak_different_inputs() {
        assert_ne!(keccak256(b"hello"), keccak256(b"world"));
    }

    #[test]
    fn multi_matches_concatenation() {
        let concat = keccak256(b"abcdef");
        let multi = keccak256_multi(&[b"ab", b"cd", b"ef"]);
        assert_eq!(concat, multi);
    }
}
