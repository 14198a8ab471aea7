//! Defines the endpoint that accepts spending form submissions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect},
};
// Must use axum_extra's Form since that supports the repeated keys used by
// the submission form's parallel arrays.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    spending::core::{NewSpending, create_spending},
};

/// The state needed to store submitted spending.
#[derive(Debug, Clone)]
pub struct SubmitSpendingState {
    /// The database connection for storing spending records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SubmitSpendingState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for submitting spending entries.
///
/// The submission form repeats each field once per row, so each field arrives
/// as an array. The arrays are parallel: index `i` of every array describes
/// the `i`-th entry.
#[derive(Debug, Deserialize)]
pub struct SpendingForm {
    /// When the money was spent, one value per entry.
    #[serde(default, rename = "date[]")]
    pub dates: Vec<String>,
    /// The amount of money spent, one value per entry.
    #[serde(default, rename = "amount[]")]
    pub amounts: Vec<f64>,
    /// A free-text category label, one value per entry.
    #[serde(default, rename = "type[]")]
    pub categories: Vec<String>,
    /// What the money was spent on, one value per entry.
    #[serde(default, rename = "description[]")]
    pub descriptions: Vec<String>,
}

/// A route handler that stores one spending record per form row, then
/// redirects to the listing page.
///
/// The number of rows is given by the `date[]` array. If any other array has
/// a different length the submission is rejected with a 400 and nothing is
/// stored. Each row is inserted independently, so a database error partway
/// through leaves the earlier rows committed.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn submit_spending_endpoint(
    State(state): State<SubmitSpendingState>,
    Form(form): Form<SpendingForm>,
) -> impl IntoResponse {
    if let Err(error) = check_field_counts(&form) {
        return error.into_response();
    }

    let connection = state.db_connection.lock().unwrap();

    for i in 0..form.dates.len() {
        let new_spending = NewSpending {
            date: form.dates[i].clone(),
            amount: form.amounts[i],
            category: form.categories[i].clone(),
            description: form.descriptions[i].clone(),
        };

        if let Err(error) = create_spending(new_spending, &connection) {
            return error.into_response();
        }
    }

    tracing::info!("Stored {} spending record(s).", form.dates.len());

    Redirect::to(endpoints::ROOT).into_response()
}

/// Check that every parallel array has as many values as `date[]`.
fn check_field_counts(form: &SpendingForm) -> Result<(), Error> {
    let expected = form.dates.len();

    for (field, actual) in [
        ("amount[]", form.amounts.len()),
        ("type[]", form.categories.len()),
        ("description[]", form.descriptions.len()),
    ] {
        if actual != expected {
            return Err(Error::FieldCountMismatch {
                field,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        endpoints,
        spending::{
            core::{count_spending, get_all_spending},
            create_endpoint::{SpendingForm, SubmitSpendingState, submit_spending_endpoint},
        },
    };

    fn get_test_state() -> SubmitSpendingState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        SubmitSpendingState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn single_row_is_stored_verbatim() {
        let state = get_test_state();

        let form = SpendingForm {
            dates: vec!["2024-01-01".to_string()],
            amounts: vec![42.0],
            categories: vec!["food".to_string()],
            descriptions: vec!["lunch".to_string()],
        };

        let response = submit_spending_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_listing_page(response);

        let connection = state.db_connection.lock().unwrap();
        let stored = get_all_spending(&connection).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].date, "2024-01-01");
        assert_eq!(stored[0].amount, 42.0);
        assert_eq!(stored[0].category, "food");
        assert_eq!(stored[0].description, "lunch");
    }

    #[tokio::test]
    async fn each_form_row_becomes_one_record() {
        let state = get_test_state();

        let form = SpendingForm {
            dates: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            amounts: vec![3.5, 120.0],
            categories: vec!["coffee".to_string(), "groceries".to_string()],
            descriptions: vec!["flat white".to_string(), "weekly shop".to_string()],
        };

        let response = submit_spending_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_listing_page(response);

        let connection = state.db_connection.lock().unwrap();
        let stored = get_all_spending(&connection).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].description, "flat white");
        assert_eq!(stored[1].description, "weekly shop");
    }

    #[tokio::test]
    async fn empty_submission_stores_nothing() {
        let state = get_test_state();

        let form = SpendingForm {
            dates: vec![],
            amounts: vec![],
            categories: vec![],
            descriptions: vec![],
        };

        let response = submit_spending_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_listing_page(response);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_spending(&connection).unwrap(), 0);
    }

    #[tokio::test]
    async fn mismatched_arrays_are_rejected_without_storing_anything() {
        let state = get_test_state();

        let form = SpendingForm {
            dates: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            amounts: vec![3.5],
            categories: vec!["coffee".to_string(), "groceries".to_string()],
            descriptions: vec!["flat white".to_string(), "weekly shop".to_string()],
        };

        let response = submit_spending_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_spending(&connection).unwrap(), 0);
    }

    #[track_caller]
    fn assert_redirects_to_listing_page(response: Response<Body>) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get("location")
            .expect("redirect must have a location header");
        assert_eq!(location, endpoints::ROOT);
    }
}
