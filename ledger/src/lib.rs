//! Host capabilities consumed by the Cinder engine.
//!
//! The engine never keeps token balances itself; reward issuance, sweeps, and
//! burns all go through an injected [`Ledger`]. Likewise the engine never
//! reads a clock or chain state directly; block height, block hashes, and
//! timestamps come from an injected [`ChainContext`].

pub mod chain;
pub mod error;
pub mod ledger;

pub use chain::ChainContext;
pub use error::LedgerError;
pub use ledger::Ledger;
