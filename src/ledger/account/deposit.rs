use super::{Account, AccountError};
use crate::ledger::Amount;

use chrono::{DateTime, Utc};

impl Account {
    /// Credit the account. The amount must be positive.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.deposit_at(amount, Utc::now())
    }

    // The clock is injected, so tests can pin it.
    fn deposit_at(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        self.last_update = Some(now);

        Ok(())
    }
}

#[cfg(test)]
mod deposit_tests {
    use super::{Account, AccountError};

    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_deposit_ok() {
        let mut acc = Account {
            name: "Alice".to_string(),
            balance: dec!(3.0),
            last_update: None,
        };

        let got = acc.deposit(dec!(3.0));
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(6.0), acc.balance);
        assert!(acc.last_update.is_some());
    }

    #[test]
    fn test_deposit_sets_the_update_time() {
        let mut acc = Account {
            name: "Alice".to_string(),
            balance: dec!(0),
            last_update: None,
        };

        let now = Utc::now();
        acc.deposit_at(dec!(1), now).expect("should deposit");
        assert_eq!(Some(now), acc.last_update);
    }

    #[test]
    fn test_deposit_non_positive_amount() {
        for amount in vec![dec!(0), dec!(-0.01), dec!(-50)] {
            let mut acc = Account {
                name: "Bob".to_string(),
                balance: dec!(2.5),
                last_update: None,
            };

            let got = acc.deposit(amount);
            assert_eq!(Err(AccountError::InvalidAmount), got);
            assert_eq!(dec!(2.5), acc.balance);
            assert_eq!(None, acc.last_update);
        }
    }

    #[test]
    fn test_deposit_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let mut acc = Account {
            name: "Carol".to_string(),
            balance: very_big_number,
            last_update: None,
        };

        let got = acc.deposit(very_big_number);
        assert_eq!(Err(AccountError::Overflow), got);
        assert_eq!(very_big_number, acc.balance);
        assert_eq!(None, acc.last_update);
    }
}
