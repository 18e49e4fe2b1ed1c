//! Nullable implementations of the host capabilities.
//!
//! "Nullable" here means fully deterministic: time only advances when told
//! to, block hashes are a pure function of height, and the ledger is a plain
//! in-memory balance. Every engine test drives these instead of real
//! infrastructure.

pub mod chain;
pub mod clock;
pub mod ledger;

pub use chain::NullChain;
pub use clock::NullClock;
pub use ledger::NullLedger;
