//! Database queries for transactions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    pagination::Pagination,
    transaction::models::{NewTransaction, Transaction},
};

/// Store a new transaction in the database.
///
/// The database assigns the ID, and the returned [Transaction] holds exactly
/// the values that were given.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let id = connection
        .prepare(
            "INSERT INTO transactions (amount, category, description, is_income, date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id",
        )?
        .query_row(
            (
                new_transaction.amount,
                &new_transaction.category,
                &new_transaction.description,
                new_transaction.is_income,
                &new_transaction.date,
            ),
            |row| row.get(0),
        )?;

    Ok(new_transaction.with_id(id))
}

/// Get a page of transactions in the order they were stored.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions(
    pagination: Pagination,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    // SQLite treats a negative LIMIT as "no limit".
    if pagination.is_empty() {
        return Ok(Vec::new());
    }

    let mut statement = connection.prepare(
        "SELECT id, amount, category, description, is_income, date
         FROM transactions
         ORDER BY id
         LIMIT :limit OFFSET :offset",
    )?;

    let transactions = statement
        .query_map(
            &[
                (":limit", &pagination.limit),
                (":offset", &pagination.offset()),
            ],
            map_transaction_row,
        )?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                is_income INTEGER NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
///
/// Expects the columns in the order they are defined in the table.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        is_income: row.get(4)?,
        date: row.get(5)?,
    })
}
