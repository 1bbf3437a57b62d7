//! Handles named bank accounts through a ledger.
//!
//! Ledger: an ordered collection of accounts, sortable by balance.
//! Account: a named balance with a last-update timestamp.

pub mod account;
pub mod command;
pub mod ledger;

pub use self::ledger::{Ledger, LedgerError};

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when looking an account up:
// (1) fn account(&self, name: &str) -> Option<&Account>
// (2) fn account(&self, name: &AccountName) -> Option<&Account>
// Implementation (2) is self-explanatory.
// Besides, maintenance is easier: changing the representation of account
// names later is trivial.
pub type AccountName = String;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;

// Balances are kept in minor units: two decimal places, i.e. whole cents.
const DECIMAL_PRECISION: u32 = 2;
