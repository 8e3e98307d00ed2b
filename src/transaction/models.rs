//! The transaction models accepted from and returned to clients.

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for transaction IDs in the database.
pub type TransactionId = i64;

/// An expense or income as submitted by a client, i.e. a transaction that has
/// not been stored yet and so has no ID.
///
/// No semantic validation is done on any field: negative amounts and
/// arbitrary date strings are stored as given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-form category, e.g. "food" or "salary".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether money was earned (`true`) or spent (`false`).
    pub is_income: bool,
    /// When the transaction happened, in whatever format the client uses.
    pub date: String,
}

impl NewTransaction {
    /// Attach the ID assigned by the database to create a [Transaction].
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            is_income: self.is_income,
            date: self.date,
        }
    }
}

/// An expense or income that has been stored in the database.
///
/// To create a new `Transaction`, store a [NewTransaction] with
/// [create_transaction](crate::create_transaction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-form category, e.g. "food" or "salary".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether money was earned (`true`) or spent (`false`).
    pub is_income: bool,
    /// When the transaction happened, in whatever format the client used.
    pub date: String,
}
