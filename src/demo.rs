//! Generates throwaway ledgers, to exercise the core without real data.

use crate::ledger::{Amount, Ledger};

use rand::Rng;

/// Build a ledger of `count` accounts named `Account_<i>`, with balances
/// uniformly distributed in [0.00, 99.99], at a granularity of one cent.
pub fn generate(count: usize, rng: &mut impl Rng) -> Ledger {
    let mut ledger = Ledger::new();

    for i in 0..count {
        // Drawing whole cents keeps the two-decimal granularity exact.
        let cents: i64 = rng.gen_range(0..10_000);
        ledger
            .open_account(format!("Account_{}", i), Amount::new(cents, 2))
            .expect("generated names are unique and balances are positive");
    }

    ledger
}

#[cfg(test)]
mod tests {
    use super::generate;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    #[test]
    fn test_generate() {
        let mut rng = StdRng::seed_from_u64(42);
        let ledger = generate(100, &mut rng);

        assert_eq!(100, ledger.len());
        assert_eq!("Account_0", ledger.iter().next().unwrap().name());
        assert!(ledger.account("Account_99").is_some());

        for account in ledger.iter() {
            assert!(account.balance() >= dec!(0.00));
            assert!(account.balance() <= dec!(99.99));
            // Never updated: the accounts were only opened.
            assert_eq!(None, account.last_update());
        }
    }

    #[test]
    // Same seed, same ledger.
    fn test_generate_is_deterministic() {
        let first = generate(50, &mut StdRng::seed_from_u64(7));
        let second = generate(50, &mut StdRng::seed_from_u64(7));

        let first: Vec<_> = first.iter().map(|account| account.balance()).collect();
        let second: Vec<_> = second.iter().map(|account| account.balance()).collect();
        assert_eq!(first, second);
    }
}
