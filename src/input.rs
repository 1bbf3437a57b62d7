use crate::ledger::command::{Command, Kind};
use crate::validate;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The CSV itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// A record doesn't translate into a valid command.
    #[error("bad record: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

// When parsing, I'm making the assumption that we want to completely abort
// on errors.
// When we're reading a CSV file, it makes sense to fix the CSV (or the code),
// then try again.
// For a real-world scenario where we're receiving a stream of events instead,
// we would probably filter out bad rows and send them to an external system
// for analysis and recovery.
pub fn parse(input: impl std::io::Read) -> Result<Vec<Command>, Error> {
    let buffered = std::io::BufReader::new(input);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader
        .deserialize::<CommandRecord>()
        .map(|r| match r {
            Ok(record) => record.try_into(),
            Err(err) => Err(err.into()),
        })
        .collect()
}

// I have a CommandRecord type because I can't directly deserialise into my
// "domain" type, i.e. Command.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// It also keeps the wire format out of the domain type: amounts arrive as
// strings, and go through the validator before they become `Amount`s.
#[derive(Debug, Deserialize)]
struct CommandRecord {
    op: CommandRecordOp,
    account: String,
    amount: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CommandRecordOp {
    Open,
    Deposit,
    Withdraw,
}

impl CommandRecordOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl TryFrom<CommandRecord> for Command {
    type Error = Error;

    fn try_from(record: CommandRecord) -> Result<Self, Error> {
        let raw_amount = record
            .amount
            .ok_or_else(|| Error::Format(format!("missing amount for {}", record.op.as_str())))?;

        let amount = validate::parse_amount(&raw_amount).map_err(|_| {
            Error::Format(format!(
                "bad amount {:?} for {}",
                raw_amount,
                record.op.as_str()
            ))
        })?;

        let kind = match record.op {
            CommandRecordOp::Open => Kind::Open(amount),
            CommandRecordOp::Deposit => Kind::Deposit(amount),
            CommandRecordOp::Withdraw => Kind::Withdraw(amount),
        };

        Ok(Command::new(kind, record.account))
    }
}

#[test]
// Parsing well-formed data should return a vector of Command.
fn test_parse_ok() {
    let data = r#"op,account,amount
open,Alice,100.00
deposit,Alice,50
withdraw,Alice,30
open,Bob,0"#;
    let reader = std::io::Cursor::new(data);
    let commands = parse(reader).expect("parsing should succeed");
    assert_eq!(4, commands.len());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"op,     account,    amount
open,   Alice,  100.00
  deposit , Alice , 50
withdraw    ,Alice,30"#;
    let reader = std::io::Cursor::new(data);
    let commands = parse(reader).expect("parsing should succeed");
    assert_eq!(3, commands.len());
}

#[test]
// Parsing incorrectly formatted data should return an Err.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"op,account,amount
some_unknown_op,Alice,1.0"#,
            "unknown variant `some_unknown_op`",
        ),
        (
            r#"op,account,amount
deposit,Alice"#,
            "found record with 2 fields, but the previous record has 3 fields",
        ),
        (
            r#"op,account,amount
deposit,Alice,1.0,,,"#,
            "found record with 6 fields, but the previous record has 3 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let got_err = parse(reader);
        assert!(got_err.is_err());

        let err = got_err.err().unwrap();
        match err {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            Error::Format(_) => panic!("unexpected error"),
        }
    }
}

#[test]
// Records with a missing or malformed amount should fail to convert into a
// Command.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"op,account,amount
deposit,Alice,"#,
            Error::Format("missing amount for deposit".to_string()),
        ),
        (
            r#"op,account,amount
withdraw,Alice,"#,
            Error::Format("missing amount for withdraw".to_string()),
        ),
        (
            r#"op,account,amount
open,Alice,"#,
            Error::Format("missing amount for open".to_string()),
        ),
        (
            // Three decimal places: rejected by the validator before it can
            // reach the ledger.
            r#"op,account,amount
deposit,Alice,12.345"#,
            Error::Format("bad amount \"12.345\" for deposit".to_string()),
        ),
        (
            r#"op,account,amount
withdraw,Alice,-5"#,
            Error::Format("bad amount \"-5\" for withdraw".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let got_err = parse(reader);
        assert_eq!(Err(want_err), got_err);
    }
}

#[test]
// When the records are well formed, they should be correctly converted into
// Command.
fn test_command_record_into_command_well_formed() {
    use rust_decimal_macros::dec;

    let test_cases: Vec<(CommandRecord, Command)> = vec![
        (
            CommandRecord {
                op: CommandRecordOp::Open,
                account: "Alice".to_string(),
                amount: Some("100.00".to_string()),
            },
            Command::new(Kind::Open(dec!(100.00)), "Alice".to_string()),
        ),
        (
            CommandRecord {
                op: CommandRecordOp::Deposit,
                account: "Bob".to_string(),
                amount: Some("50".to_string()),
            },
            Command::new(Kind::Deposit(dec!(50)), "Bob".to_string()),
        ),
        (
            CommandRecord {
                op: CommandRecordOp::Withdraw,
                account: "Carol".to_string(),
                amount: Some("12.5".to_string()),
            },
            Command::new(Kind::Withdraw(dec!(12.5)), "Carol".to_string()),
        ),
    ];

    for (record, want) in test_cases {
        let got: Command = record.try_into().expect("should convert");
        assert_eq!(want, got);
    }
}
