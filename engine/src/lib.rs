//! The Cinder reward engine.
//!
//! Gates token payouts behind a verifiable proof-of-work puzzle with
//! self-adjusting difficulty. Each successful claim settles a reward through
//! the injected ledger, begins a new epoch with a fresh challenge derived
//! from recent chain history, and periodically retargets the puzzle to hold a
//! target epoch rate. Once difficulty collapses below its rolling watermark,
//! a fraction of distributed supply is burned per claim.

pub mod auth;
pub mod config;
pub mod engine;
pub mod epoch;
pub mod error;
pub mod event;
pub mod verify;

pub use auth::{Authorizer, SingleOwner};
pub use config::EngineConfig;
pub use engine::{ClaimReceipt, MintEngine};
pub use epoch::EpochState;
pub use error::EngineError;
pub use event::Event;
pub use verify::verify_solution;
