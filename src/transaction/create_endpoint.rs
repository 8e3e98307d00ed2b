//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    extract::JsonBody,
    transaction::{NewTransaction, Transaction, TransactionState, core::create_transaction},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
///
/// Malformed request bodies are rejected before the database is touched.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonBody(new_transaction): JsonBody<NewTransaction>,
) -> Result<Json<Transaction>, Error> {
    let session = state.database.session()?;

    let transaction = create_transaction(new_transaction, &session).inspect_err(|error| {
        tracing::error!("could not create transaction: {error}");
    })?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok(Json(transaction))
}
