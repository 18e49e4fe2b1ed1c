//! Host chain-context capability.

use cinder_types::{Hash256, Timestamp};

/// A reliable, monotonic source of chain observables.
///
/// The hosting environment guarantees height and timestamp never go
/// backwards between calls and that `block_hash` is fixed and public for any
/// already-produced height.
pub trait ChainContext {
    /// Current block height.
    fn block_height(&self) -> u64;

    /// Identifying hash of an already-produced block.
    fn block_hash(&self, height: u64) -> Hash256;

    /// Current wall-clock time as seen by the host.
    fn timestamp(&self) -> Timestamp;
}
