//! A minimal backend for recording and listing financial transactions.
//!
//! This library provides a JSON REST API with two operations on
//! `/transactions/`:
//! - `POST` stores a new transaction and responds with it, including the ID
//!   assigned by the database.
//! - `GET` lists stored transactions a page at a time using the `skip` and
//!   `limit` query parameters.
//!
//! Transactions are stored in SQLite. Each request opens its own
//! [Session] on the [Database] held in the [AppState].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod cors;
mod db;
mod endpoints;
mod error;
mod extract;
mod logging;
mod pagination;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use db::{Database, Session, initialize as initialize_db};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{DEFAULT_LIMIT, DEFAULT_SKIP, Pagination};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionId, count_transactions, create_transaction,
    get_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    tracing::info!("Shutting down, waiting for open connections to finish.");
    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
