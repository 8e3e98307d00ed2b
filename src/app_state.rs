//! Implements a struct that holds the state of the REST server.

use axum::http::HeaderValue;

use crate::{Database, Error};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The storage client used to open a database session per request.
    pub database: Database,

    /// The only origin allowed to make cross-origin requests, e.g. "http://localhost:3000".
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Create a new [AppState] backed by `database`.
    ///
    /// This function will initialize the database by adding the tables for the
    /// domain models if they do not exist yet, so it should be called once at
    /// startup before any request is served.
    ///
    /// # Errors
    /// Returns an [Error::InvalidOrigin] if `allowed_origin` is empty, the
    /// wildcard "*", or not a valid header value, or an [Error::SqlError] if
    /// the database cannot be initialized.
    pub fn new(database: Database, allowed_origin: &str) -> Result<Self, Error> {
        let allowed_origin = parse_origin(allowed_origin)?;

        database.initialize()?;

        Ok(Self {
            database,
            allowed_origin,
        })
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, Error> {
    let trimmed = origin.trim();

    // Credentials cannot be allowed for the wildcard origin.
    if trimmed.is_empty() || trimmed == "*" {
        return Err(Error::InvalidOrigin(origin.to_owned()));
    }

    HeaderValue::from_str(trimmed).map_err(|_| Error::InvalidOrigin(origin.to_owned()))
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Database, Error, transaction::count_transactions};

    #[test]
    fn new_initializes_database() {
        let database = Database::in_memory().unwrap();

        let state = AppState::new(database, "http://localhost:3000").unwrap();

        let session = state.database.session().unwrap();
        assert_eq!(count_transactions(&session).unwrap(), 0);
        assert_eq!(state.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn new_trims_origin() {
        let state = AppState::new(Database::in_memory().unwrap(), " https://app.example.com ")
            .unwrap();

        assert_eq!(state.allowed_origin, "https://app.example.com");
    }

    #[test]
    fn new_rejects_invalid_origins() {
        for origin in ["", "   ", "*", "http://bad\norigin"] {
            let result = AppState::new(Database::in_memory().unwrap(), origin);

            assert_eq!(
                result.err(),
                Some(Error::InvalidOrigin(origin.to_owned())),
                "origin {origin:?}"
            );
        }
    }

    #[test]
    fn new_fails_when_database_is_unavailable() {
        let database = Database::open("/this/directory/does/not/exist/finance.db");

        let result = AppState::new(database, "http://localhost:3000");

        assert!(
            matches!(result, Err(Error::SqlError(_))),
            "want SqlError, got {result:?}"
        );
    }
}
