use std::error::Error;

use clap::Parser;
use tracing::Level;

use bank_account::{Account, Money, logging::setup_logging};

/// Open an account and withdraw from it.
///
/// With the default arguments the withdrawal is rejected and the program
/// exits with an error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The initial balance of the account in dollars, e.g. "1000" or "12.34".
    #[arg(long, default_value = "1000", allow_hyphen_values = true)]
    balance: Money,

    /// The amount to withdraw in dollars.
    #[arg(long, default_value = "-10", allow_hyphen_values = true)]
    amount: Money,

    /// Print the account as JSON instead of the formatted balance.
    #[arg(long)]
    json: bool,

    /// The minimum level of log events to print. Overridden by `RUST_LOG`.
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.log_level)?;

    let mut account = Account::new(args.balance);
    tracing::info!("Opened account with balance {}", account.balance());

    account.withdraw(args.amount)?;

    if args.json {
        println!("{}", serde_json::to_string(&account)?);
    } else {
        println!("Balance: {}", account.balance());
    }

    Ok(())
}
