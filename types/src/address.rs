//! Claimant address type.

use crate::hexfmt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte claimant address, derived from the trailing 20 bytes of the
/// Keccak-256 hash of a secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{}..)", hexfmt::encode(&self.0[..4]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hexfmt::encode(&self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_is_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1u8; 20]).is_zero());
    }

    #[test]
    fn display_is_prefixed_hex() {
        let addr = Address::new([0xab; 20]);
        assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));
    }
}
