//! Fundamental types for the Cinder reward engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: claimant addresses, 256-bit hashes, timestamps, and the `U256`
//! big integer used for targets, difficulties, and token amounts.

use serde::{Deserialize, Serialize};
use uint::construct_uint;

pub mod address;
pub mod hash;
pub mod time;

pub use address::Address;
pub use hash::Hash256;
pub use time::Timestamp;

construct_uint! {
    /// Unsigned 256-bit integer (4x64-bit words).
    ///
    /// Used for puzzle targets, solution digests, difficulty ratios, and
    /// ledger amounts.
    #[derive(Serialize, Deserialize)]
    pub struct U256(4);
}

// Inline hex encoding shared by the Display impls, to keep this crate free of
// the `hex` dependency.
pub(crate) mod hexfmt {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u256_from_big_endian_roundtrip() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x2a;
        let v = U256::from_big_endian(&bytes);
        assert_eq!(v, U256::from(42u64));
    }

    #[test]
    fn u256_shift_builds_powers_of_two() {
        let v = U256::one() << 220;
        assert_eq!(v >> 220, U256::one());
        assert!(v > U256::from(u128::MAX));
    }
}
