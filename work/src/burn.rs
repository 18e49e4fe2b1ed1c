//! Burn-activation hysteresis.
//!
//! Tracks the highest difficulty ever observed after an activation block and
//! flips a burn flag once difficulty decays below 70% of that watermark.
//! Difficulty climbing to a fresh peak disables burning again, so the flag
//! never chatters around a single threshold.

use cinder_types::U256;

/// Sentinel activation height meaning "observation never begins".
pub const NEVER: u64 = u64::MAX;

/// Percentage of the watermark that difficulty must fall below to enable
/// burning.
const FLOOR_PCT: u64 = 70;

/// Two-state burn flag driven by difficulty relative to a rolling watermark.
#[derive(Clone, Debug)]
pub struct BurnMonitor {
    enabled: bool,
    activation_block: u64,
    max_observed_difficulty: U256,
}

/// A state transition reported by [`BurnMonitor::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurnTransition {
    Enabled,
    Disabled,
}

impl BurnMonitor {
    /// Start disabled with observation deferred forever.
    pub fn new() -> Self {
        Self {
            enabled: false,
            activation_block: NEVER,
            max_observed_difficulty: U256::zero(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn activation_block(&self) -> u64 {
        self.activation_block
    }

    pub fn max_observed_difficulty(&self) -> U256 {
        self.max_observed_difficulty
    }

    /// Set the block height after which observation begins.
    pub fn set_activation_block(&mut self, block: u64) {
        self.activation_block = block;
    }

    /// Administrative override of the flag, bypassing hysteresis.
    pub fn force_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Feed one post-retarget difficulty reading into the state machine.
    ///
    /// Inert until `current_block > activation_block`. A fresh peak raises
    /// the watermark and disables burning; while disabled, difficulty below
    /// 70% of the watermark enables it.
    pub fn observe(&mut self, difficulty: U256, current_block: u64) -> Option<BurnTransition> {
        if current_block <= self.activation_block {
            return None;
        }

        if difficulty > self.max_observed_difficulty {
            self.max_observed_difficulty = difficulty;
            if self.enabled {
                self.enabled = false;
                return Some(BurnTransition::Disabled);
            }
        } else if !self.enabled && difficulty < self.floor_line() {
            self.enabled = true;
            return Some(BurnTransition::Enabled);
        }
        None
    }

    /// 70% of the watermark: `max_observed - floor(max_observed * 30 / 100)`.
    fn floor_line(&self) -> U256 {
        let cut = self
            .max_observed_difficulty
            .checked_mul(U256::from(100 - FLOOR_PCT))
            .map(|v| v / U256::from(100))
            .unwrap_or_else(|| {
                self.max_observed_difficulty / U256::from(100) * U256::from(100 - FLOOR_PCT)
            });
        self.max_observed_difficulty - cut
    }
}

impl Default for BurnMonitor {
    fn default() -> Self {
        Self::new()
    }
}
