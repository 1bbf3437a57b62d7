use super::{Account, AccountError};
use crate::ledger::Amount;

use chrono::{DateTime, Utc};

impl Account {
    /// Debit the account. The amount must be positive, and can't exceed the
    /// current balance: an overdraft is rejected with `InsufficientFunds`
    /// and leaves the account untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.withdraw_at(amount, Utc::now())
    }

    // The clock is injected, so tests can pin it.
    fn withdraw_at(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidAmount);
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }

        // The guard above keeps the balance from ever going below zero.
        self.balance -= amount;
        self.last_update = Some(now);

        Ok(())
    }
}
