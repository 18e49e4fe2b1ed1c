//! Audit events emitted by the engine.

use cinder_types::{Address, Hash256, U256};
use serde::Serialize;

/// Auditable records of every state-changing operation, drained by the host
/// in the order they occurred.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TargetSet { target: U256 },
    Claim {
        to: Address,
        reward: U256,
        epoch: u64,
        challenge: Hash256,
    },
    RetargetIntervalSet { epochs: u64 },
    DifficultyDenominatorSet { denominator: u64 },
    TargetBlocksPerPeriodSet { blocks: u64 },
    BurnActivationBlockSet { block: u64 },
    BurningEnabled,
    BurningDisabled,
}
