use super::{AccountName, Amount};

#[derive(Debug, PartialEq)]
pub enum Kind {
    Open(Amount),     // Create the account, with an initial balance.
    Deposit(Amount),  // Credit the account.
    Withdraw(Amount), // Debit the account, if funds allow it.
}

/// A single operation to apply to one account of the ledger.
#[derive(Debug, PartialEq)]
pub struct Command {
    pub(super) kind: Kind,
    pub(super) account: AccountName,
}

impl Command {
    // The new() function ensures we can only carry amounts with a decimal
    // precision of 2.
    pub fn new(kind: Kind, account: AccountName) -> Self {
        let kind = match kind {
            Kind::Open(amount) => Kind::Open(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Deposit(amount) => Kind::Deposit(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Withdraw(amount) => Kind::Withdraw(amount.round_dp(super::DECIMAL_PRECISION)),
        };

        Self { kind, account }
    }

    /// The name of the account this command targets.
    pub fn account(&self) -> &AccountName {
        &self.account
    }
}

#[test]
// Decimal precision is 2 places. We should be unable to carry more precise
// amounts.
fn test_command_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999), dec!(1.0)),
        (dec!(1.001), dec!(1.0)),
        (dec!(1.23), dec!(1.23)),
        (dec!(1.239), dec!(1.24)),
    ] {
        let command = Command::new(Kind::Withdraw(raw_amount), "Alice".to_string());
        assert_eq!(Kind::Withdraw(want_amount), command.kind);
    }
}
