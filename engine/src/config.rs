//! Engine configuration.

use crate::error::EngineError;
use cinder_types::U256;
use serde::{Deserialize, Serialize};

/// All tunable engine parameters.
///
/// Defaults follow the classic mineable-token profile: a 50-coin reward at 8
/// decimals, a retarget every 1024 epochs aiming at 60 host blocks per epoch,
/// and a 10% burn amount.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed amount minted to the claimant per successful claim.
    pub reward_amount: U256,

    /// Fixed amount destroyed per claim while burning is enabled.
    pub burn_amount: U256,

    /// Hardest allowed puzzle target. Must be positive.
    pub min_target: U256,

    /// Easiest allowed puzzle target; also the initial target and the
    /// numerator of the difficulty ratio.
    pub max_target: U256,

    /// Retarget once every this many epochs.
    pub retarget_interval_epochs: u64,

    /// Divisor of the per-retarget adjustment step
    /// (`current_target / denominator` per percentage point).
    pub retarget_denominator: u64,

    /// Intended host-block count per retarget period.
    pub target_blocks_per_period: u64,

    /// Minimum seconds between two settled epochs. Submissions closer than
    /// this are treated as duplicate solutions; the window within which a
    /// second genuine solve is falsely rejected is exactly this wide.
    pub min_epoch_separation_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reward_amount: U256::from(50_0000_0000u64),
            burn_amount: U256::from(5_0000_0000u64),
            min_target: U256::one() << 16,
            max_target: U256::one() << 234,
            retarget_interval_epochs: 1024,
            retarget_denominator: 2000,
            target_blocks_per_period: 60 * 1024,
            min_epoch_separation_secs: 1,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_target.is_zero() {
            return Err(EngineError::InvalidConfig("min_target must be positive".into()));
        }
        if self.min_target > self.max_target {
            return Err(EngineError::InvalidConfig(
                "min_target must not exceed max_target".into(),
            ));
        }
        if self.reward_amount.is_zero() {
            return Err(EngineError::InvalidConfig("reward_amount must be positive".into()));
        }
        if self.retarget_interval_epochs == 0 {
            return Err(EngineError::InvalidConfig(
                "retarget_interval_epochs must be positive".into(),
            ));
        }
        if self.retarget_denominator == 0 {
            return Err(EngineError::InvalidConfig(
                "retarget_denominator must be positive".into(),
            ));
        }
        if self.target_blocks_per_period == 0 {
            return Err(EngineError::InvalidConfig(
                "target_blocks_per_period must be positive".into(),
            ));
        }
        if self.min_epoch_separation_secs == 0 {
            return Err(EngineError::InvalidConfig(
                "min_epoch_separation_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_min_target_rejected() {
        let config = EngineConfig {
            min_target: U256::zero(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = EngineConfig {
            min_target: U256::one() << 220,
            max_target: U256::one() << 16,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn zero_rates_rejected() {
        for field in 0..3 {
            let mut config = EngineConfig::default();
            match field {
                0 => config.retarget_interval_epochs = 0,
                1 => config.retarget_denominator = 0,
                _ => config.target_blocks_per_period = 0,
            }
            assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
        }
    }
}
