use super::account::{Account, AccountError};
use super::command::{Command, Kind};
use super::{AccountName, Amount};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account with that name exists in the ledger.
    #[error("unknown account")]
    UnknownAccount,

    /// An account with that name already exists. Names are unique within a
    /// ledger, otherwise looking accounts up by name would be ambiguous.
    #[error("an account with that name already exists")]
    DuplicateAccount,

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// An ordered collection of accounts.
///
/// Accounts keep their insertion order, until `sort_by_balance` reorders
/// them by ascending balance.
///
/// The ledger exclusively owns its accounts: every mutation goes through it.
/// It is not designed for concurrent access; share it across threads behind
/// a lock, or don't.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new account to the ledger.
    pub fn open_account(
        &mut self,
        name: AccountName,
        initial_balance: Amount,
    ) -> Result<(), LedgerError> {
        if self.account(&name).is_some() {
            return Err(LedgerError::DuplicateAccount);
        }

        self.accounts.push(Account::open(name, initial_balance)?);
        Ok(())
    }

    /// Credit the account with that name.
    pub fn deposit(&mut self, name: &str, amount: Amount) -> Result<(), LedgerError> {
        Ok(self.account_mut(name)?.deposit(amount)?)
    }

    /// Debit the account with that name.
    pub fn withdraw(&mut self, name: &str, amount: Amount) -> Result<(), LedgerError> {
        Ok(self.account_mut(name)?.withdraw(amount)?)
    }

    /// Translate one command into one ledger operation.
    pub fn apply(&mut self, command: &Command) -> Result<(), LedgerError> {
        match command.kind {
            Kind::Open(amount) => self.open_account(command.account.clone(), amount),
            Kind::Deposit(amount) => self.deposit(&command.account, amount),
            Kind::Withdraw(amount) => self.withdraw(&command.account, amount),
        }
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    fn account_mut(&mut self, name: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.name == name)
            .ok_or(LedgerError::UnknownAccount)
    }

    /// Reorder the accounts by ascending balance.
    ///
    /// The sort is stable: accounts with equal balances keep their relative
    /// order, and sorting an already-sorted ledger changes nothing.
    pub fn sort_by_balance(&mut self) {
        self.accounts.sort_by(|a, b| a.balance.cmp(&b.balance));
    }

    /// Iterate over the accounts, in current ledger order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
