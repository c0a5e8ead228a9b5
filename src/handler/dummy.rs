// Canned status endpoints

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub fn okay() -> Response<Full<Bytes>> {
    http::build_empty_response(StatusCode::OK)
}

pub fn deny() -> Response<Full<Bytes>> {
    http::build_empty_response(StatusCode::BAD_REQUEST)
}

pub fn fail() -> Response<Full<Bytes>> {
    http::build_empty_response(StatusCode::INTERNAL_SERVER_ERROR)
}
