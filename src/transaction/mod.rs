//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `NewTransaction` and `Transaction` models
//! - Database functions for storing and listing transactions
//! - The route handlers for creating and listing transactions

mod core;
mod create_endpoint;
mod list_endpoint;
mod models;

use axum::extract::FromRef;

use crate::{AppState, Database};

pub use self::core::{
    count_transactions, create_transaction, create_transaction_table, get_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use models::{NewTransaction, Transaction, TransactionId};

/// The state needed to create or list transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database that transactions are stored in.
    pub database: Database,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
        }
    }
}
