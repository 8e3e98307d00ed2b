//! Access to the application's SQLite database.
//!
//! A [Database] describes where the database lives. Request handlers call
//! [Database::session] to open a fresh connection for the duration of one
//! request; the connection is closed when the returned [Session] is dropped.

use std::{
    ops::Deref,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use rusqlite::{Connection, OpenFlags, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// How long a session waits on a locked database file before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Used to give each in-memory database a unique name.
static IN_MEMORY_DATABASE_COUNT: AtomicUsize = AtomicUsize::new(0);

/// The storage client for the application database.
///
/// Cloning a `Database` is cheap and all clones refer to the same database.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    flags: OpenFlags,
    /// Shared-cache in-memory databases are deleted once their last
    /// connection closes, so one connection is held for the database's lifetime.
    _keep_alive: Option<Arc<Mutex<Connection>>>,
}

impl Database {
    /// Create a client for the SQLite database file at `path`.
    ///
    /// The file is created when the first session is opened if it does not
    /// already exist.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            flags: OpenFlags::default(),
            _keep_alive: None,
        }
    }

    /// Create a client for a new, empty in-memory database.
    ///
    /// Sessions opened from the returned client (or its clones) all see the
    /// same data, while separate calls to this function give isolated databases.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the in-memory database cannot be created.
    pub fn in_memory() -> Result<Self, Error> {
        let database_number = IN_MEMORY_DATABASE_COUNT.fetch_add(1, Ordering::Relaxed);
        let uri = format!(
            "file:finance-tracker-{}-{database_number}?mode=memory&cache=shared",
            std::process::id()
        );
        let flags = OpenFlags::default() | OpenFlags::SQLITE_OPEN_URI;
        let connection = Connection::open_with_flags(&uri, flags)?;

        Ok(Self {
            path: PathBuf::from(uri),
            flags,
            _keep_alive: Some(Arc::new(Mutex::new(connection))),
        })
    }

    /// Open a new session on the database.
    ///
    /// Each call opens its own connection; sessions are never shared.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be opened, e.g. the
    /// parent directory of the database file does not exist.
    pub fn session(&self) -> Result<Session, Error> {
        let connection = Connection::open_with_flags(&self.path, self.flags)?;
        connection.busy_timeout(BUSY_TIMEOUT)?;

        tracing::trace!("opened database session on {}", self.path.display());

        Ok(Session { connection })
    }

    /// Create the application's tables if they do not exist yet.
    ///
    /// This is safe to call on a database that has already been initialized.
    ///
    /// # Errors
    /// Returns an error if a session cannot be opened or the tables cannot be created.
    pub fn initialize(&self) -> Result<(), Error> {
        let session = self.session()?;

        initialize(&session)
    }
}

/// A connection to the application database that lives for one request.
///
/// Dereferences to a [rusqlite::Connection]. The connection is closed when
/// the session is dropped.
#[derive(Debug)]
pub struct Session {
    connection: Connection,
}

impl Deref for Session {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!("closing database session");
    }
}

/// Create all the application tables.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        db::{Database, initialize},
        transaction::{NewTransaction, count_transactions, create_transaction},
    };

    fn new_transaction() -> NewTransaction {
        NewTransaction {
            amount: 12.3,
            category: "groceries".to_owned(),
            description: "milk".to_owned(),
            is_income: false,
            date: "2024-02-01".to_owned(),
        }
    }

    #[test]
    fn initialize_is_idempotent() {
        let database = Database::in_memory().unwrap();

        database.initialize().unwrap();
        database.initialize().unwrap();

        let session = database.session().unwrap();
        initialize(&session).unwrap();
        assert_eq!(count_transactions(&session).unwrap(), 0);
    }

    #[test]
    fn initialize_keeps_existing_rows() {
        let database = Database::in_memory().unwrap();
        database.initialize().unwrap();
        create_transaction(new_transaction(), &database.session().unwrap()).unwrap();

        database.initialize().unwrap();

        assert_eq!(count_transactions(&database.session().unwrap()).unwrap(), 1);
    }

    #[test]
    fn in_memory_database_outlives_sessions() {
        let database = Database::in_memory().unwrap();
        database.initialize().unwrap();

        {
            let session = database.session().unwrap();
            create_transaction(new_transaction(), &session).unwrap();
        }

        let session = database.clone().session().unwrap();
        assert_eq!(count_transactions(&session).unwrap(), 1);
    }

    #[test]
    fn in_memory_databases_are_isolated() {
        let first = Database::in_memory().unwrap();
        let second = Database::in_memory().unwrap();
        first.initialize().unwrap();
        second.initialize().unwrap();

        create_transaction(new_transaction(), &first.session().unwrap()).unwrap();

        assert_eq!(count_transactions(&second.session().unwrap()).unwrap(), 0);
    }

    #[test]
    fn sessions_are_independent_connections() {
        let database = Database::in_memory().unwrap();
        database.initialize().unwrap();

        let first = database.session().unwrap();
        let second = database.session().unwrap();
        create_transaction(new_transaction(), &first).unwrap();
        drop(first);

        assert_eq!(count_transactions(&second).unwrap(), 1);
    }

    #[test]
    fn session_fails_when_database_is_unavailable() {
        let database = Database::open("/this/directory/does/not/exist/finance.db");

        let result = database.session();

        assert!(
            matches!(result, Err(Error::SqlError(_))),
            "want SqlError, got {result:?}"
        );
    }
}
