//! Epoch and challenge state.

use cinder_ledger::ChainContext;
use cinder_types::{Hash256, Timestamp};

/// One mining round's worth of state: the counter, the live challenge, and
/// the settlement timestamp used for duplicate detection.
#[derive(Clone, Debug)]
pub struct EpochState {
    epoch: u64,
    challenge: Hash256,
    last_epoch_at: Timestamp,
}

impl EpochState {
    /// Pre-construction state; the engine advances once immediately so no
    /// caller ever observes epoch 0.
    pub(crate) fn genesis() -> Self {
        Self {
            epoch: 0,
            challenge: Hash256::ZERO,
            last_epoch_at: Timestamp::EPOCH,
        }
    }

    pub fn number(&self) -> u64 {
        self.epoch
    }

    pub fn challenge(&self) -> Hash256 {
        self.challenge
    }

    pub fn last_epoch_at(&self) -> Timestamp {
        self.last_epoch_at
    }

    /// Begin the next epoch: bump the counter, stamp the clock, and derive a
    /// fresh challenge from the previous block's hash — unknown until that
    /// block was produced, fixed and public afterwards.
    pub(crate) fn advance(&mut self, ctx: &dyn ChainContext) {
        self.epoch += 1;
        self.last_epoch_at = ctx.timestamp();
        self.challenge = ctx.block_hash(ctx.block_height().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_nullables::NullChain;

    #[test]
    fn advance_bumps_counter_and_stamps_time() {
        let chain = NullChain::new(50, 9000);
        let mut state = EpochState::genesis();
        state.advance(&chain);
        assert_eq!(state.number(), 1);
        assert_eq!(state.last_epoch_at(), Timestamp::new(9000));
        assert_eq!(state.challenge(), chain.block_hash(49));
    }

    #[test]
    fn challenge_changes_as_chain_advances() {
        let chain = NullChain::new(50, 9000);
        let mut state = EpochState::genesis();
        state.advance(&chain);
        let first = state.challenge();
        chain.advance_blocks(1);
        state.advance(&chain);
        assert_eq!(state.number(), 2);
        assert_ne!(state.challenge(), first);
    }
}
