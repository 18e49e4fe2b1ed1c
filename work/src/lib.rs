//! Difficulty control for the Cinder reward engine.
//!
//! Two small state machines:
//! - [`DifficultyController`] holds the current puzzle target and retargets it
//!   on epoch boundaries to hold a target blocks-per-period rate.
//! - [`BurnMonitor`] watches the resulting difficulty against a rolling
//!   watermark and flips a burn flag with hysteresis once difficulty collapses
//!   well below its historical peak.

pub mod burn;
pub mod difficulty;

pub use burn::{BurnMonitor, BurnTransition, NEVER};
pub use difficulty::{DifficultyController, RetargetOutcome};
