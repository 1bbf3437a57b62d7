use crate::ledger::{account::Account, AccountName, Amount, Ledger};

use serde::Serialize;

#[derive(Serialize)]
struct BalanceRecord {
    #[serde(rename = "account")]
    name: AccountName,

    balance: Amount,

    // RFC 3339, empty until the first successful deposit or withdrawal.
    last_update: Option<String>,
}

impl BalanceRecord {
    fn new(account: &Account) -> Self {
        Self {
            name: account.name().to_string(),
            balance: account.balance(),
            last_update: account.last_update().map(|t| t.to_rfc3339()),
        }
    }
}

/// Writes the ledger's balances to the given stream, in current ledger order.
pub fn write(output: impl std::io::Write, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);

    for account in ledger.iter() {
        writer.serialize(BalanceRecord::new(account))?;
    }

    writer.flush()?;
    Ok(())
}
