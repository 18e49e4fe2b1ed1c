use cinder_types::U256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: U256, available: U256 },

    #[error("transfer rejected: {0}")]
    TransferRejected(String),

    #[error("burn rejected: {0}")]
    BurnRejected(String),
}
