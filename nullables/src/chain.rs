//! Nullable chain context — deterministic block height, hashes, and time.

use crate::clock::NullClock;
use cinder_crypto::keccak256_multi;
use cinder_ledger::ChainContext;
use cinder_types::{Hash256, Timestamp};
use std::cell::Cell;

/// A deterministic chain for testing.
///
/// Block hashes are a pure function of height, so two chains at the same
/// height agree on history, while each height yields a distinct hash.
pub struct NullChain {
    height: Cell<u64>,
    clock: NullClock,
}

impl NullChain {
    pub fn new(height: u64, time_secs: u64) -> Self {
        Self {
            height: Cell::new(height),
            clock: NullClock::new(time_secs),
        }
    }

    /// Produce `count` new blocks, each one second apart.
    pub fn advance_blocks(&self, count: u64) {
        self.height.set(self.height.get() + count);
        self.clock.advance(count);
    }

    pub fn set_height(&self, height: u64) {
        self.height.set(height);
    }

    /// Direct access to the underlying clock.
    pub fn clock(&self) -> &NullClock {
        &self.clock
    }
}

impl ChainContext for NullChain {
    fn block_height(&self) -> u64 {
        self.height.get()
    }

    fn block_hash(&self, height: u64) -> Hash256 {
        Hash256::new(keccak256_multi(&[b"null-chain-block", &height.to_be_bytes()]))
    }

    fn timestamp(&self) -> Timestamp {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_differ_per_height() {
        let chain = NullChain::new(10, 0);
        assert_ne!(chain.block_hash(9), chain.block_hash(10));
        assert_eq!(chain.block_hash(9), chain.block_hash(9));
    }

    #[test]
    fn advancing_moves_height_and_time() {
        let chain = NullChain::new(5, 100);
        chain.advance_blocks(3);
        assert_eq!(chain.block_height(), 8);
        assert_eq!(chain.timestamp(), Timestamp::new(103));
    }
}
