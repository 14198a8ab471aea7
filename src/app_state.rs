//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection, shared by all request handlers.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

#[cfg(test)]
mod app_state_tests {
    use rusqlite::Connection;

    use crate::AppState;

    #[test]
    fn new_initializes_the_schema() {
        let conn = Connection::open_in_memory().unwrap();

        let state = AppState::new(conn).unwrap();

        let connection = state.db_connection.lock().unwrap();
        let count: u32 = connection
            .query_row("SELECT COUNT(id) FROM spending;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
