//! Validates raw monetary amount strings before they reach the ledger.

use crate::ledger::Amount;

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

// One or more digits, optionally followed by a dot and one or two decimals:
// "12", "12.5" and "12.50" are amounts, "12.345" is not.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("hardcoded pattern should compile"));

/// The string is not a well-formed monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid monetary amount")]
pub struct MalformedAmount;

pub fn is_valid_amount(raw: &str) -> bool {
    AMOUNT_PATTERN.is_match(raw)
}

/// Parse a raw amount string into an `Amount`.
pub fn parse_amount(raw: &str) -> Result<Amount, MalformedAmount> {
    if !is_valid_amount(raw) {
        return Err(MalformedAmount);
    }

    // The pattern guarantees the shape, but a ridiculously long digit string
    // can still overflow the decimal type.
    Amount::from_str(raw).map_err(|_| MalformedAmount)
}
