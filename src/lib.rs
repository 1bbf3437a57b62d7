//! Builds an in-memory ledger of named bank accounts, from a stream of
//! commands, and reports their balances.

pub mod demo;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
pub mod validate;
