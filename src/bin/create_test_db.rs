use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use finance_tracker::{
    Database, NewTransaction, count_transactions, create_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let session = Database::open(output_path).session()?;

    initialize_db(&session)?;

    println!("Creating sample transactions...");

    for new_transaction in sample_transactions() {
        create_transaction(new_transaction, &session)?;
    }

    println!(
        "Success! Created {} transactions.",
        count_transactions(&session)?
    );

    Ok(())
}

fn sample_transactions() -> Vec<NewTransaction> {
    [
        (2500.0, "salary", "Monthly pay", true, "2024-01-01"),
        (1200.0, "rent", "January rent", false, "2024-01-02"),
        (42.5, "food", "lunch", false, "2024-01-03"),
        (85.2, "groceries", "Weekly shop", false, "2024-01-06"),
        (15.0, "transport", "Bus card top up", false, "2024-01-08"),
        (120.0, "gifts", "Birthday money", true, "2024-01-12"),
    ]
    .into_iter()
    .map(
        |(amount, category, description, is_income, date)| NewTransaction {
            amount,
            category: category.to_owned(),
            description: description.to_owned(),
            is_income,
            date: date.to_owned(),
        },
    )
    .collect()
}
