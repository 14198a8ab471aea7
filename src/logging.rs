//! Middleware for logging requests and responses.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};

/// The number of body bytes included in `info` level logs before truncation.
const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log each request and its response at the `info` level.
///
/// Form submissions carry their data in the request body, so the body is
/// buffered and included in the log line. Bodies longer than
/// [LOG_BODY_LENGTH_LIMIT] bytes are truncated at `info` and logged in full
/// at `debug`.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = body_to_text(body).await;

    tracing::info!(
        "Received {} {} with body: {}",
        parts.method,
        parts.uri,
        truncated(&body_text)
    );
    tracing::debug!("Full request body: {body_text:?}");

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = body_to_text(body).await;

    tracing::info!(
        "Sending response {} with body: {}",
        parts.status,
        truncated(&body_text)
    );
    tracing::debug!("Full response body: {body_text:?}");

    Response::from_parts(parts, body_text.into())
}

async fn body_to_text(body: Body) -> String {
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    String::from_utf8_lossy(&body_bytes).to_string()
}

fn truncated(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LENGTH_LIMIT) {
        Some((index, _)) => format!("{}...", &body[..index]),
        None => format!("{body:?}"),
    }
}

#[cfg(test)]
mod truncation_tests {
    use super::{LOG_BODY_LENGTH_LIMIT, truncated};

    #[test]
    fn short_bodies_are_logged_in_full() {
        assert_eq!(truncated("date%5B%5D=2024-01-01"), "\"date%5B%5D=2024-01-01\"");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        let logged = truncated(&body);

        assert_eq!(logged.len(), LOG_BODY_LENGTH_LIMIT + 3);
        assert!(logged.ends_with("..."));
    }
}
