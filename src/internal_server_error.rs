//! Defines the template and route handlers for the internal server error page.

use askama::Template;
use axum::{http::StatusCode, response::Response};

use crate::shared_templates::render;

#[derive(Template)]
#[template(path = "views/internal_server_error_500.html")]
pub struct InternalServerErrorPageTemplate<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerErrorPageTemplate<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

pub async fn get_internal_server_error_page() -> Response {
    get_internal_server_error_response()
}

pub fn get_internal_server_error_response() -> Response {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        InternalServerErrorPageTemplate::default(),
    )
}
