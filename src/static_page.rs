//! Serves the on-disk submission form page.

use axum::response::{Html, IntoResponse, Response};

use crate::Error;

/// The on-disk HTML file containing the spending submission form.
pub const NEW_SPENDING_PAGE_PATH: &str = "static/new_spending.html";

/// A route handler that serves the submission form file verbatim.
///
/// The listing page also serves this file when no spending has been recorded
/// yet, so that the first thing a new user sees is the form.
pub async fn get_new_spending_page() -> Response {
    serve_new_spending_page().await
}

pub async fn serve_new_spending_page() -> Response {
    match tokio::fs::read_to_string(NEW_SPENDING_PAGE_PATH).await {
        Ok(contents) => Html(contents).into_response(),
        Err(error) => {
            tracing::error!("Could not read {NEW_SPENDING_PAGE_PATH}: {error}");
            Error::StaticFileError(NEW_SPENDING_PAGE_PATH.to_owned()).into_response()
        }
    }
}
