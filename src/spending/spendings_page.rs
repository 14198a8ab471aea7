//! Defines the route handler for the page that displays spending as a table.

use std::sync::{Arc, Mutex};

use askama::Template;
use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, endpoints, shared_templates::render, static_page::serve_new_spending_page,
};

use super::core::{Spending, count_spending, get_all_spending};

/// The state needed to display the spending listing page.
#[derive(Debug, Clone)]
pub struct SpendingsPageState {
    /// The database connection for reading spending records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SpendingsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the spending records as a table.
#[derive(Template)]
#[template(path = "views/spendings.html")]
struct SpendingsTemplate {
    /// The records to display, one table row each.
    spendings: Vec<Spending>,
    /// The route of the page for submitting more entries.
    new_spending_route: &'static str,
}

/// A route handler that displays all recorded spending.
///
/// When nothing has been recorded yet the submission form page is served
/// instead, so that a fresh database greets the user with the form.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_spendings_page(State(state): State<SpendingsPageState>) -> Response {
    // The lock guard must not be held across the await below.
    let query_result = {
        let connection = state.db_connection.lock().unwrap();

        count_spending(&connection).and_then(|count| {
            if count == 0 {
                Ok(None)
            } else {
                get_all_spending(&connection).map(Some)
            }
        })
    };

    match query_result {
        Err(error) => error.into_response(),
        Ok(None) => serve_new_spending_page().await,
        Ok(Some(spendings)) => render(
            StatusCode::OK,
            SpendingsTemplate {
                spendings,
                new_spending_route: endpoints::NEW_SPENDING_VIEW,
            },
        ),
    }
}
