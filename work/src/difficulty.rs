//! Periodic puzzle-target retargeting.
//!
//! Every `interval_epochs` epochs the controller compares how many blocks the
//! period actually took against `target_blocks_per_period` and moves the
//! target by a percentage of itself: faster-than-intended mining shrinks the
//! target (harder), slower-than-intended growth widens it (easier). The
//! percentage is clamped to [0, 1000] and the resulting target to
//! `[min_target, max_target]`.

use cinder_types::U256;

/// Maximum adjustment percentage applied in a single retarget.
const MAX_ADJUST_PCT: u128 = 1000;

/// Puzzle-target state and retargeting parameters.
///
/// Invariant: `min_target <= current_target <= max_target` after every
/// mutation, with `min_target` strictly positive so difficulty
/// (`max_target / current_target`) is always defined.
#[derive(Clone, Debug)]
pub struct DifficultyController {
    current_target: U256,
    period_start_block: u64,
    interval_epochs: u64,
    denominator: u64,
    target_blocks_per_period: u64,
    min_target: U256,
    max_target: U256,
}

/// Result of a retarget attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetargetOutcome {
    /// Target moved (or stayed, at a clamp boundary or exact-rate period).
    Retargeted { new_target: U256, difficulty: U256 },
    /// Zero blocks elapsed since the period start. That is a logic fault in
    /// the caller's epoch accounting, not a domain event, so the state is
    /// left untouched.
    SkippedZeroElapsed,
}

impl DifficultyController {
    /// Create a controller starting at the easiest target (`max_target`).
    ///
    /// # Panics
    /// Panics if `min_target` is zero or exceeds `max_target`, or if any of
    /// the rate parameters is zero. Callers validate configuration before
    /// constructing.
    pub fn new(
        min_target: U256,
        max_target: U256,
        interval_epochs: u64,
        denominator: u64,
        target_blocks_per_period: u64,
        start_block: u64,
    ) -> Self {
        assert!(!min_target.is_zero(), "min_target must be positive");
        assert!(min_target <= max_target, "min_target must not exceed max_target");
        assert!(interval_epochs > 0, "interval_epochs must be positive");
        assert!(denominator > 0, "denominator must be positive");
        assert!(target_blocks_per_period > 0, "target_blocks_per_period must be positive");
        Self {
            current_target: max_target,
            period_start_block: start_block,
            interval_epochs,
            denominator,
            target_blocks_per_period,
            min_target,
            max_target,
        }
    }

    pub fn current_target(&self) -> U256 {
        self.current_target
    }

    /// Human-scaled inverse hardness: `max_target / current_target`.
    pub fn difficulty(&self) -> U256 {
        self.max_target / self.current_target
    }

    pub fn min_target(&self) -> U256 {
        self.min_target
    }

    pub fn max_target(&self) -> U256 {
        self.max_target
    }

    pub fn interval_epochs(&self) -> u64 {
        self.interval_epochs
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn target_blocks_per_period(&self) -> u64 {
        self.target_blocks_per_period
    }

    pub fn period_start_block(&self) -> u64 {
        self.period_start_block
    }

    /// Overwrite the current target (administrative), clamped into bounds.
    pub fn set_target(&mut self, target: U256) {
        self.current_target = self.clamp(target);
    }

    pub fn set_interval_epochs(&mut self, epochs: u64) {
        assert!(epochs > 0, "interval_epochs must be positive");
        self.interval_epochs = epochs;
    }

    pub fn set_denominator(&mut self, denominator: u64) {
        assert!(denominator > 0, "denominator must be positive");
        self.denominator = denominator;
    }

    pub fn set_target_blocks_per_period(&mut self, blocks: u64) {
        assert!(blocks > 0, "target_blocks_per_period must be positive");
        self.target_blocks_per_period = blocks;
    }

    /// Retarget at an epoch boundary.
    ///
    /// `elapsed = current_block - period_start_block` drives the adjustment:
    /// a short period raises difficulty (shrinks the target), a long period
    /// lowers it. Both directions move by
    /// `(current_target / denominator) * pct` with `pct` clamped to
    /// [0, 1000], and the result is clamped into `[min_target, max_target]`.
    pub fn retarget(&mut self, current_block: u64) -> RetargetOutcome {
        let elapsed = current_block.saturating_sub(self.period_start_block);
        if elapsed == 0 {
            tracing::warn!(
                block = current_block,
                period_start = self.period_start_block,
                "retarget invoked with zero elapsed blocks, skipping"
            );
            return RetargetOutcome::SkippedZeroElapsed;
        }

        let step = self.current_target / U256::from(self.denominator);
        let adjusted = if elapsed < self.target_blocks_per_period {
            let excess_pct = (self.target_blocks_per_period as u128 * 100 / elapsed as u128)
                .saturating_sub(100)
                .min(MAX_ADJUST_PCT);
            let delta = step.checked_mul(U256::from(excess_pct)).unwrap_or(U256::MAX);
            self.current_target.checked_sub(delta).unwrap_or_default()
        } else {
            let shortage_pct = (elapsed as u128 * 100 / self.target_blocks_per_period as u128)
                .saturating_sub(100)
                .min(MAX_ADJUST_PCT);
            let delta = step.checked_mul(U256::from(shortage_pct)).unwrap_or(U256::MAX);
            self.current_target.checked_add(delta).unwrap_or(U256::MAX)
        };

        self.current_target = self.clamp(adjusted);
        self.period_start_block = current_block;
        RetargetOutcome::Retargeted {
            new_target: self.current_target,
            difficulty: self.difficulty(),
        }
    }

    fn clamp(&self, target: U256) -> U256 {
        target.max(self.min_target).min(self.max_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DifficultyController {
        DifficultyController::new(
            U256::one() << 16,
            U256::one() << 220,
            1024,
            2000,
            60 * 1024,
            0,
        )
    }

    #[test]
    fn starts_at_max_target() {
        let ctrl = controller();
        assert_eq!(ctrl.current_target(), U256::one() << 220);
        assert_eq!(ctrl.difficulty(), U256::one());
    }

    #[test]
    fn fast_period_shrinks_target() {
        let mut ctrl = controller();
        let before = ctrl.current_target();
        // Half the intended blocks elapsed.
        match ctrl.retarget(30 * 1024) {
            RetargetOutcome::Retargeted { new_target, .. } => {
                assert!(new_target < before);
                assert!(new_target >= ctrl.min_target());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn slow_period_grows_target() {
        let mut ctrl = controller();
        ctrl.set_target(U256::one() << 200);
        let before = ctrl.current_target();
        // Twice the intended blocks elapsed.
        match ctrl.retarget(2 * 60 * 1024) {
            RetargetOutcome::Retargeted { new_target, .. } => {
                assert!(new_target > before);
                assert!(new_target <= ctrl.max_target());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn exact_period_leaves_target_unchanged() {
        let mut ctrl = controller();
        ctrl.set_target(U256::one() << 200);
        let before = ctrl.current_target();
        match ctrl.retarget(60 * 1024) {
            RetargetOutcome::Retargeted { new_target, .. } => assert_eq!(new_target, before),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn zero_elapsed_skips_and_preserves_state() {
        let mut ctrl = controller();
        let before = ctrl.current_target();
        assert_eq!(ctrl.retarget(0), RetargetOutcome::SkippedZeroElapsed);
        assert_eq!(ctrl.current_target(), before);
        assert_eq!(ctrl.period_start_block(), 0);
    }

    #[test]
    fn retarget_resets_period_start() {
        let mut ctrl = controller();
        ctrl.retarget(70_000);
        assert_eq!(ctrl.period_start_block(), 70_000);
    }

    #[test]
    fn extreme_fast_period_clamps_percentage_and_floor() {
        let mut ctrl = controller();
        ctrl.set_target(U256::one() << 16);
        // One block elapsed out of 61440 intended: pct clamps to 1000, the
        // adjustment overshoots, and the clamp lands the target on the floor.
        match ctrl.retarget(1) {
            RetargetOutcome::Retargeted { new_target, .. } => {
                assert_eq!(new_target, ctrl.min_target());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn extreme_slow_period_clamps_at_max() {
        let mut ctrl = controller();
        // Already at max: growth clamps back to max_target.
        match ctrl.retarget(u64::MAX / 2) {
            RetargetOutcome::Retargeted { new_target, .. } => {
                assert_eq!(new_target, ctrl.max_target());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn admin_target_is_clamped() {
        let mut ctrl = controller();
        ctrl.set_target(U256::one());
        assert_eq!(ctrl.current_target(), ctrl.min_target());
        ctrl.set_target(U256::MAX);
        assert_eq!(ctrl.current_target(), ctrl.max_target());
    }

    #[test]
    #[should_panic(expected = "min_target must be positive")]
    fn zero_min_target_rejected() {
        DifficultyController::new(U256::zero(), U256::MAX, 1024, 2000, 60, 0);
    }
}
