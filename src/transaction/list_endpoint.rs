//! Defines the endpoint for listing stored transactions a page at a time.

use axum::{Json, extract::State};

use crate::{
    Error,
    extract::QueryParams,
    pagination::Pagination,
    transaction::{Transaction, TransactionState, core::get_transactions},
};

/// A route handler for listing transactions in the order they were stored.
///
/// Skips `skip` transactions and returns at most `limit`, see [Pagination]
/// for the defaults. Pages past the end are empty rather than an error.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let session = state.database.session()?;

    let transactions = get_transactions(pagination, &session).inspect_err(|error| {
        tracing::error!("could not get transactions for {pagination:?}: {error}");
    })?;

    Ok(Json(transactions))
}
