//! The application's endpoint URIs.

/// The root route which displays recorded spending, or the submission form
/// when nothing has been recorded yet.
pub const ROOT: &str = "/";
/// The page with the form for submitting new spending entries.
pub const NEW_SPENDING_VIEW: &str = "/add";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route that accepts spending form submissions.
pub const SUBMIT_SPENDING: &str = "/submit";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::NEW_SPENDING_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::SUBMIT_SPENDING);
    }
}
