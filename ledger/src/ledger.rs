//! External fungible-asset ledger capability.

use crate::error::LedgerError;
use cinder_types::{Address, U256};

/// The engine's view of the external token ledger.
///
/// All three operations act on the engine's own holdings: `balance_of_self`
/// reads them, `transfer` pays rewards out of them, `burn` destroys part of
/// them.
pub trait Ledger {
    /// Balance currently held by the engine's own account.
    fn balance_of_self(&self) -> U256;

    /// Move `amount` from the engine's holdings to `to`.
    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError>;

    /// Destroy `amount` from the engine's holdings.
    fn burn(&mut self, amount: U256) -> Result<(), LedgerError>;
}
