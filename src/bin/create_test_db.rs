use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use rust_decimal::Decimal;
use time::{Date, Duration, OffsetDateTime};

use finance_tracker::{Amount, Transaction, TransactionType, create_transaction, initialize_db};

/// A utility for creating a test database for the finance_tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// The sample transactions as (days ago, type, amount, category, description).
const SAMPLE_TRANSACTIONS: [(i64, TransactionType, i64, &str, &str); 8] = [
    (30, TransactionType::Income, 8_500_000, "Salary", "Monthly salary"),
    (28, TransactionType::Expense, 2_000_000, "Bills", "Rent"),
    (21, TransactionType::Expense, 350_000, "Bills", "Electricity and water"),
    (14, TransactionType::Income, 1_250_000, "Freelance", "Logo design project"),
    (10, TransactionType::Expense, 150_000, "Transport", "Fuel"),
    (7, TransactionType::Expense, 425_000, "Shopping", "New shoes"),
    (3, TransactionType::Expense, 85_000, "Entertainment", "Cinema tickets"),
    (1, TransactionType::Expense, 50_000, "Food", "Lunch"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'finance.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let today = OffsetDateTime::now_utc().date();

    for (days_ago, transaction_type, amount, category, description) in SAMPLE_TRANSACTIONS {
        let date: Date = today - Duration::days(days_ago);
        let amount = Amount::new(Decimal::from(amount))?;

        let data = Transaction::build(transaction_type, amount, date, description).category(category);
        create_transaction(data, &conn)?;
    }

    println!("Success!");

    Ok(())
}
