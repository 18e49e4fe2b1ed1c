//! 256-bit hash type used for challenges, block hashes, and solution digests.

use crate::hexfmt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte hash value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({}..)", hexfmt::encode(&self.0[..4]))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hexfmt::encode(&self.0))
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hash_is_zero() {
        assert!(Hash256::ZERO.is_zero());
        assert!(!Hash256::new([7u8; 32]).is_zero());
    }

    #[test]
    fn display_is_full_hex() {
        let h = Hash256::new([0x0f; 32]);
        assert_eq!(h.to_string().len(), 64);
    }
}
