use cinder_crypto::RecoveryError;
use cinder_ledger::LedgerError;
use cinder_types::U256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("signed message hash does not match the expected digest")]
    IncorrectMessage,

    #[error("solution digest exceeds the current target")]
    HighHash,

    #[error("duplicate solution against an already-claimed epoch")]
    DuplicateSolution,

    #[error("reward cannot be funded: need {needed}, available {available}")]
    InsufficientBalance { needed: U256, available: U256 },

    #[error("caller is not the administrative identity")]
    Unauthorized,

    #[error("signature recovery failed: {0}")]
    SignatureRecovery(#[from] RecoveryError),

    #[error("ledger operation failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
