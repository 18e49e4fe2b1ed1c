//! Nullable ledger — an in-memory balance with scriptable burn failures.

use cinder_ledger::{Ledger, LedgerError};
use cinder_types::{Address, U256};

/// A deterministic in-memory ledger for testing.
///
/// Tracks the engine's own balance, records every outgoing transfer, and can
/// be told to reject burns to exercise the best-effort burn path.
pub struct NullLedger {
    balance: U256,
    fail_burns: bool,
    /// Every transfer performed, in order.
    pub transfers: Vec<(Address, U256)>,
    /// Total amount destroyed.
    pub burned: U256,
}

impl NullLedger {
    pub fn new(initial_balance: U256) -> Self {
        Self {
            balance: initial_balance,
            fail_burns: false,
            transfers: Vec::new(),
            burned: U256::zero(),
        }
    }

    /// Make every subsequent `burn` call fail.
    pub fn set_fail_burns(&mut self, fail: bool) {
        self.fail_burns = fail;
    }
}

impl Ledger for NullLedger {
    fn balance_of_self(&self) -> U256 {
        self.balance
    }

    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance = self.balance - amount;
        self.transfers.push((*to, amount));
        Ok(())
    }

    fn burn(&mut self, amount: U256) -> Result<(), LedgerError> {
        if self.fail_burns {
            return Err(LedgerError::BurnRejected("burns disabled by test".into()));
        }
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance = self.balance - amount;
        self.burned = self.burned + amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_debits_and_records() {
        let mut ledger = NullLedger::new(U256::from(100u64));
        let to = Address::new([1u8; 20]);
        ledger.transfer(&to, U256::from(40u64)).unwrap();
        assert_eq!(ledger.balance_of_self(), U256::from(60u64));
        assert_eq!(ledger.transfers, vec![(to, U256::from(40u64))]);
    }

    #[test]
    fn overdraft_rejected() {
        let mut ledger = NullLedger::new(U256::from(10u64));
        let err = ledger.transfer(&Address::ZERO, U256::from(11u64)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(ledger.balance_of_self(), U256::from(10u64));
    }

    #[test]
    fn scripted_burn_failure() {
        let mut ledger = NullLedger::new(U256::from(100u64));
        ledger.set_fail_burns(true);
        assert!(ledger.burn(U256::from(1u64)).is_err());
        ledger.set_fail_burns(false);
        ledger.burn(U256::from(30u64)).unwrap();
        assert_eq!(ledger.burned, U256::from(30u64));
        assert_eq!(ledger.balance_of_self(), U256::from(70u64));
    }
}
