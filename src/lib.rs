//! Spendlog is a small web app for recording personal spending.
//!
//! This library provides an HTTP server that accepts spending entries from an
//! HTML form and serves a page listing everything recorded so far.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod shared_templates;
mod spending;
mod static_page;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::{
    internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
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
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The parallel form arrays in a submission had different lengths.
    ///
    /// Each row of the submission form produces one value per field, so the
    /// arrays must line up index for index. Nothing is inserted when they do
    /// not.
    #[error("the form field \"{field}\" has {actual} value(s) but {expected} date(s) were given")]
    FieldCountMismatch {
        /// The name of the mismatched form field.
        field: &'static str,
        /// The number of values implied by the `date[]` array.
        expected: usize,
        /// The number of values actually received for `field`.
        actual: usize,
    },

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A static page file could not be read from disk.
    ///
    /// The path string should only be logged for debugging on the server.
    /// Clients receive a generic internal server error.
    #[error("could not read the static page file \"{0}\"")]
    StaticFileError(String),

    /// An unhandled/unexpected SQL error.
    ///
    /// The inner error should only be logged for debugging on the server.
    /// Clients receive a generic internal server error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::FieldCountMismatch { .. } => {
                (StatusCode::BAD_REQUEST, Html(self.to_string())).into_response()
            }
            Error::StaticFileError(_) | Error::SqlError(_) => {
                tracing::error!("returning internal server error to client: {self}");
                get_internal_server_error_response()
            }
        }
    }
}
