//! The API endpoints URIs.

/// The route for creating and listing transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// [TRANSACTIONS] without the trailing slash, redirects to [TRANSACTIONS].
pub const TRANSACTIONS_NO_SLASH: &str = "/transactions";
