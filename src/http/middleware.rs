//! Cross-origin middleware.
//!
//! The browser tool calls this API directly from a static frontend, so the
//! same three CORS headers go on every response, error responses included.
//! OPTIONS preflights short-circuit here with an empty 200 before any
//! routing or handler logic runs.

use axum::extract::Request;
use axum::http::header::{HeaderMap, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");
const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("GET, POST, OPTIONS");
const ALLOW_HEADERS: HeaderValue = HeaderValue::from_static("Content-Type");

/// Apply CORS headers; answer preflights immediately.
pub async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert("access-control-allow-origin", ALLOW_ORIGIN);
    headers.insert("access-control-allow-methods", ALLOW_METHODS);
    headers.insert("access-control-allow-headers", ALLOW_HEADERS);
}
