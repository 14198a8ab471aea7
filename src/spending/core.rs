//! Defines the core data model and database queries for spending records.

use rusqlite::{Connection, Row};

use crate::{Error, database_id::SpendingId};

// ============================================================================
// MODELS
// ============================================================================

/// A record of money spent on something.
#[derive(Debug, Clone, PartialEq)]
pub struct Spending {
    /// The ID of the spending record.
    pub id: SpendingId,
    /// When the money was spent, as the text the user entered.
    pub date: String,
    /// The amount of money spent.
    pub amount: f64,
    /// A free-text category label, e.g. "food". Stored in the `type` column.
    pub category: String,
    /// A text description of what the money was spent on.
    pub description: String,
}

/// A spending record that has not been stored yet, i.e. has no ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpending {
    /// When the money was spent, as the text the user entered.
    pub date: String,
    /// The amount of money spent.
    pub amount: f64,
    /// A free-text category label, e.g. "food".
    pub category: String,
    /// A text description of what the money was spent on.
    pub description: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new spending record in the database.
///
/// All fields are stored verbatim, the database assigns the ID.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_spending(
    new_spending: NewSpending,
    connection: &Connection,
) -> Result<Spending, Error> {
    let spending = connection
        .prepare(
            "INSERT INTO spending (date, amount, type, description)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, date, amount, type, description",
        )?
        .query_one(
            (
                new_spending.date,
                new_spending.amount,
                new_spending.category,
                new_spending.description,
            ),
            map_spending_row,
        )?;

    Ok(spending)
}

/// Retrieve all spending records from the database, oldest ID first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_spending(connection: &Connection) -> Result<Vec<Spending>, Error> {
    connection
        .prepare("SELECT id, date, amount, type, description FROM spending ORDER BY id")?
        .query_map([], map_spending_row)?
        .map(|maybe_spending| maybe_spending.map_err(|error| error.into()))
        .collect()
}

/// Get the total number of spending records in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn count_spending(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM spending;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the spending table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_spending_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS spending (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                type TEXT NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Spending].
pub fn map_spending_row(row: &Row) -> Result<Spending, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let description = row.get(4)?;

    Ok(Spending {
        id,
        date,
        amount,
        category,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
