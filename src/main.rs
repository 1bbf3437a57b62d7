use account_ledger::demo;
use account_ledger::ledger::Ledger;
use account_ledger::run::run;

use rust_decimal_macros::dec;
use std::fs::File;

fn main() {
    match std::env::args().nth(1) {
        // With a CSV path: run the command pipeline, print the balance
        // report to stdout and the notices to stderr.
        Some(path) => {
            let input = File::open(path).expect("could not open the commands file");
            let notices = run(input, std::io::stdout()).expect("malformed commands file");
            for notice in notices {
                eprintln!("{}", notice);
            }
        }

        // Without arguments: walk through a small demo.
        None => demo(),
    }
}

fn demo() {
    let mut ledger = demo::generate(100, &mut rand::thread_rng());

    println!("Before sorting:");
    for account in ledger.iter().take(5) {
        println!("{}", account.describe_balance());
    }

    ledger.sort_by_balance();

    println!("\nAfter sorting by balance:");
    for account in ledger.iter().take(5) {
        println!("{}", account.describe_balance());
    }

    // The original smoke test: Alice deposits, withdraws, then overdraws.
    let mut ledger = Ledger::new();
    ledger
        .open_account("Alice".to_string(), dec!(100.0))
        .expect("the ledger is empty, the name can't be taken");
    ledger.deposit("Alice", dec!(50)).expect("should deposit");
    ledger.withdraw("Alice", dec!(30)).expect("should withdraw");

    println!();
    if let Err(err) = ledger.withdraw("Alice", dec!(9999)) {
        println!("withdrawing $9999: {}", err);
    }
    println!(
        "{}",
        ledger
            .account("Alice")
            .expect("Alice was opened above")
            .describe_balance()
    );
}
