use super::{AccountName, Amount};

use chrono::{DateTime, Utc};
use thiserror::Error;

mod deposit;
mod describe;
mod withdraw;

/// Note: I chose to keep errors simple here.
/// In a real-world scenario, we would most likely need some debugging info
/// (e.g. the account name, the amount, and the balance at that point).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Funds in the account are unsufficient for a withdrawal.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The amount is not a positive number, so there is nothing meaningful
    /// to deposit or withdraw.
    #[error("the amount must be positive")]
    InvalidAmount,

    /// Adding more money to the balance would overflow.
    #[error("balance overflow")]
    Overflow,
}

/// A named bank account.
///
/// The balance can never go below zero: a withdrawal that would make it
/// negative is rejected and leaves the account untouched.
///
/// `last_update` starts unset, and is set every time a deposit or a
/// withdrawal succeeds - and only then. A rejected operation doesn't
/// touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(crate) name: AccountName,
    pub(crate) balance: Amount,
    pub(crate) last_update: Option<DateTime<Utc>>,
}

impl Account {
    /// Open an account. The initial balance may be zero, but not negative.
    pub fn open(name: AccountName, initial_balance: Amount) -> Result<Self, AccountError> {
        if initial_balance.is_sign_negative() {
            return Err(AccountError::InvalidAmount);
        }

        Ok(Self {
            name,
            balance: initial_balance.round_dp(super::DECIMAL_PRECISION),
            last_update: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// When the last successful deposit or withdrawal happened, if any.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }
}
