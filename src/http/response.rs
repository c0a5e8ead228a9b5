//! HTTP response building module
//!
//! Every response is plain text; builders never panic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Build a plain-text response with the given status and body
pub fn build_text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let body = body.into();
    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(body))
        })
}

/// Build a response with no body
pub fn build_empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    build_text_response(status, Bytes::new())
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "404 page not found\n")
}

/// Build the 500 answer for a request body that could not be read
pub fn build_body_error_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "couldn't read body")
}

/// 200 when every probe succeeded, 500 otherwise
pub const fn aggregate_status(all_ok: bool) -> StatusCode {
    if all_ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("failed to build {status} response: {error}"));
}
