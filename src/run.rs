use crate::input;
use crate::ledger::account::AccountError;
use crate::ledger::{AccountName, Ledger, LedgerError};
use crate::output;

use std::fmt;
use thiserror::Error;

/// A recoverable problem met while applying a command.
///
/// The ledger keeps its state and the run keeps going; the caller decides
/// how to present the notice, if at all.
#[derive(Debug, PartialEq)]
pub struct Notice {
    pub account: AccountName,
    pub error: LedgerError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            // The classic bank teller line.
            LedgerError::Account(AccountError::InsufficientFunds) => {
                write!(f, "Insufficient funds for {}", self.account)
            }
            _ => write!(f, "{}: {}", self.account, self.error),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] input::Error),

    #[error("failed to write the balance report: {0}")]
    Report(String),
}

/// Run the whole pipeline: parse commands from the input, apply each of them
/// to a fresh ledger, then write the balance report to the output.
///
/// Recoverable command failures (insufficient funds, unknown accounts, ...)
/// don't stop the run: they are returned as notices. Malformed input aborts.
pub fn run(
    input: impl std::io::Read,
    output: impl std::io::Write,
) -> Result<Vec<Notice>, Error> {
    let commands = input::parse(input)?;

    let mut ledger = Ledger::new();
    let mut notices = Vec::new();
    for command in &commands {
        if let Err(error) = ledger.apply(command) {
            notices.push(Notice {
                account: command.account().clone(),
                error,
            });
        }
    }

    output::write(output, &ledger).map_err(|err| Error::Report(err.to_string()))?;

    Ok(notices)
}

#[cfg(test)]
mod run_tests {
    use super::{run, Notice};
    use crate::ledger::account::AccountError;
    use crate::ledger::LedgerError;

    #[test]
    fn test_run_ok() {
        let data = r#"op,account,amount
open,Alice,100.00
deposit,Alice,50
withdraw,Alice,30
open,Bob,3.50"#;
        let mut output = Vec::new();

        let notices = run(std::io::Cursor::new(data), &mut output).expect("should run");
        assert!(notices.is_empty());

        let got = String::from_utf8(output).unwrap();
        let mut lines = got.lines();
        assert_eq!(Some("account,balance,last_update"), lines.next());
        assert!(lines.next().unwrap().starts_with("Alice,120.00,"));
        assert!(lines.next().unwrap().starts_with("Bob,3.50,"));
    }

    #[test]
    // Recoverable failures become notices, and the run keeps going.
    fn test_run_with_notices() {
        let data = r#"op,account,amount
open,Alice,100.00
withdraw,Alice,9999
open,Alice,5.00
deposit,Nobody,10
deposit,Alice,50"#;
        let mut output = Vec::new();

        let notices = run(std::io::Cursor::new(data), &mut output).expect("should run");
        assert_eq!(
            vec![
                Notice {
                    account: "Alice".to_string(),
                    error: LedgerError::Account(AccountError::InsufficientFunds),
                },
                Notice {
                    account: "Alice".to_string(),
                    error: LedgerError::DuplicateAccount,
                },
                Notice {
                    account: "Nobody".to_string(),
                    error: LedgerError::UnknownAccount,
                },
            ],
            notices
        );

        // The failed commands left the ledger untouched: only the opening
        // balance and the last deposit went through.
        let got = String::from_utf8(output).unwrap();
        assert!(got.lines().nth(1).unwrap().starts_with("Alice,150.00,"));
    }

    #[test]
    fn test_run_aborts_on_malformed_input() {
        let data = r#"op,account,amount
this is not a record"#;
        let mut output = Vec::new();

        let got = run(std::io::Cursor::new(data), &mut output);
        assert!(got.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice {
            account: "Alice".to_string(),
            error: LedgerError::Account(AccountError::InsufficientFunds),
        };
        assert_eq!("Insufficient funds for Alice", notice.to_string());

        let notice = Notice {
            account: "Bob".to_string(),
            error: LedgerError::UnknownAccount,
        };
        assert_eq!("Bob: unknown account", notice.to_string());
    }
}
