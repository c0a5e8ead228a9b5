//! Liveness and readiness handlers

use crate::config::AppState;
use crate::http;
use crate::probe::Report;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub fn alive() -> Response<Full<Bytes>> {
    http::build_empty_response(StatusCode::OK)
}

/// Probe the startup endpoint list; 200 only if every endpoint answered 200
pub async fn ready(state: &AppState) -> Response<Full<Bytes>> {
    let endpoints = state.config.ready.endpoints.iter().map(String::as_str);
    let results = state.prober.probe_all(endpoints).await;
    let report = Report::without_latency(&results);
    http::build_text_response(http::aggregate_status(report.all_ok), report.body)
}
