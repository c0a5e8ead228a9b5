//! Utility endpoints: reach, log, setheaders, echo, time, nano
//!
//! Handlers that take a body read it whole first and answer 500
//! `couldn't read body` if that fails.

use std::borrow::Cow;
use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, Utc};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Response, StatusCode};

use crate::http;
use crate::http::body::BoxError;
use crate::logger::Logger;
use crate::probe::{Prober, Report};

/// Read the body as text, lossily decoding invalid UTF-8
async fn read_text<B>(body: B, limit: usize) -> Result<String, BoxError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let bytes = http::read_body(body, limit).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lines split on `\n` with a trailing `\r` removed
fn body_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Probe each posted URL in order and report status and latency per line
pub async fn reach<B>(req: Request<B>, prober: &Prober, limit: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let Ok(text) = read_text(req.into_body(), limit).await else {
        return http::build_body_error_response();
    };

    let results = prober.probe_all(body_lines(&text)).await;
    let report = Report::with_latency(&results);
    http::build_text_response(http::aggregate_status(report.all_ok), report.body)
}

/// Log every non-blank line at DEBUG
pub async fn log<B>(req: Request<B>, logger: &Logger, limit: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let Ok(text) = read_text(req.into_body(), limit).await else {
        return http::build_body_error_response();
    };

    for line in text.split('\n') {
        let line = line.trim();
        if !line.is_empty() {
            logger.debug(line);
        }
    }

    http::build_empty_response(StatusCode::OK)
}

/// Apply each `Name: Value` line as a response header
pub async fn set_headers<B>(
    req: Request<B>,
    logger: &Logger,
    limit: usize,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let Ok(text) = read_text(req.into_body(), limit).await else {
        return http::build_body_error_response();
    };

    let mut resp = http::build_empty_response(StatusCode::OK);
    for line in body_lines(&text) {
        match parse_header_line(line) {
            Some((name, value)) => {
                resp.headers_mut().insert(name, value);
            }
            None => logger.warn_endpoint("/setheaders", "ignored line"),
        }
    }
    resp
}

/// Split on the first `": "`; both halves must be valid header parts
fn parse_header_line(line: &str) -> Option<(HeaderName, HeaderValue)> {
    let (name, value) = line.split_once(": ")?;
    let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
    let value = HeaderValue::from_str(value).ok()?;
    Some((name, value))
}

/// Reflect the request line, headers and raw body
pub async fn echo<B>(req: Request<B>, limit: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let (parts, body) = req.into_parts();
    let Ok(body) = http::read_body(body, limit).await else {
        return http::build_body_error_response();
    };

    let target = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |pq| pq.as_str());

    let mut out = format!("{} {target}\n", parts.method);
    for name in parts.headers.keys() {
        let values: Vec<Cow<'_, str>> = parts
            .headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect();
        let _ = writeln!(
            out,
            "{}: [{}]",
            canonical_header_name(name.as_str()),
            values.join(" ")
        );
    }
    out.push('\n');

    let mut payload = out.into_bytes();
    payload.extend_from_slice(&body);
    http::build_text_response(StatusCode::OK, payload)
}

/// `content-type` -> `Content-Type`
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// One instant as UNIX seconds, UTC and local time
pub fn time() -> Response<Full<Bytes>> {
    let now = Utc::now();
    let body = format!(
        "UNIX {}\nUTC  {}\nSYS  {}\n",
        now.timestamp(),
        now,
        now.with_timezone(&Local)
    );
    http::build_text_response(StatusCode::OK, body)
}

/// Current UNIX time in nanoseconds
pub fn nano() -> Response<Full<Bytes>> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    http::build_text_response(StatusCode::OK, nanos.to_string())
}
