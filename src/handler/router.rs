//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: exact path match, dispatch,
//! then the trace line once the response exists.

use crate::config::AppState;
use crate::handler::{dummy, health, utility};
use crate::http;
use crate::http::body::BoxError;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Fixed endpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Alive,
    Ready,
    Okay,
    Deny,
    Fail,
    Reach,
    Log,
    SetHeaders,
    Echo,
    Time,
    Nano,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        let route = match path {
            "/alive" => Self::Alive,
            "/ready" => Self::Ready,
            "/okay" => Self::Okay,
            "/deny" => Self::Deny,
            "/fail" => Self::Fail,
            "/reach" => Self::Reach,
            "/log" => Self::Log,
            "/setheaders" => Self::SetHeaders,
            "/echo" => Self::Echo,
            "/time" => Self::Time,
            "/nano" => Self::Nano,
            _ => return None,
        };
        Some(route)
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Alive => "/alive",
            Self::Ready => "/ready",
            Self::Okay => "/okay",
            Self::Deny => "/deny",
            Self::Fail => "/fail",
            Self::Reach => "/reach",
            Self::Log => "/log",
            Self::SetHeaders => "/setheaders",
            Self::Echo => "/echo",
            Self::Time => "/time",
            Self::Nano => "/nano",
        }
    }

    /// Health checks and `/nano` stay out of the log
    pub const fn is_traced(self) -> bool {
        !matches!(self, Self::Alive | Self::Ready | Self::Nano)
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let Some(route) = Route::from_path(req.uri().path()) else {
        return Ok(http::build_404_response());
    };

    let response = dispatch(route, req, &state).await;

    if route.is_traced() {
        state.logger.trace_endpoint(route.path());
    }

    Ok(response)
}

async fn dispatch<B>(route: Route, req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let limit = state.config.http.max_body_size;
    match route {
        Route::Alive => health::alive(),
        Route::Ready => health::ready(state).await,
        Route::Okay => dummy::okay(),
        Route::Deny => dummy::deny(),
        Route::Fail => dummy::fail(),
        Route::Reach => utility::reach(req, &state.prober, limit).await,
        Route::Log => utility::log(req, &state.logger, limit).await,
        Route::SetHeaders => utility::set_headers(req, &state.logger, limit).await,
        Route::Echo => utility::echo(req, limit).await,
        Route::Time => utility::time(),
        Route::Nano => utility::nano(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn get(path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    #[test]
    fn test_route_table_round_trips() {
        for route in [
            Route::Alive,
            Route::Ready,
            Route::Okay,
            Route::Deny,
            Route::Fail,
            Route::Reach,
            Route::Log,
            Route::SetHeaders,
            Route::Echo,
            Route::Time,
            Route::Nano,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/alive/"), None);
        assert_eq!(Route::from_path("/"), None);
    }

    #[tokio::test]
    async fn test_untraced_routes() {
        let (state, sink) = AppState::capturing(vec![]);
        let state = Arc::new(state);

        for path in ["/nano", "/alive", "/ready"] {
            let resp = handle_request(get(path), Arc::clone(&state)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
        }
        assert!(sink.lines().is_empty(), "{:?}", sink.lines());

        handle_request(get("/okay"), Arc::clone(&state)).await.unwrap();
        handle_request(get("/time"), state).await.unwrap();
        assert_eq!(
            sink.messages(),
            vec!["[TRACE] endpoint=/okay", "[TRACE] endpoint=/time"]
        );
    }

    #[tokio::test]
    async fn test_trace_follows_handler_output() {
        let (state, sink) = AppState::capturing(vec![]);
        let req = Request::builder()
            .method("POST")
            .uri("/setheaders")
            .body(Full::new(Bytes::from_static(b"X-Ok: yes\nno separator")))
            .unwrap();

        let resp = handle_request(req, Arc::new(state)).await.unwrap();
        assert_eq!(resp.headers()["x-ok"], "yes");
        assert_eq!(
            sink.messages(),
            vec![
                "[WARN] endpoint=/setheaders msg=\"ignored line\"",
                "[TRACE] endpoint=/setheaders",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (state, sink) = AppState::capturing(vec![]);
        let resp = handle_request(get("/nope"), Arc::new(state)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"404 page not found\n");
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_static_statuses() {
        let state = Arc::new(AppState::for_tests(vec![]));
        for (path, status) in [
            ("/alive", StatusCode::OK),
            ("/okay", StatusCode::OK),
            ("/deny", StatusCode::BAD_REQUEST),
            ("/fail", StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let resp = handle_request(get(path), Arc::clone(&state)).await.unwrap();
            assert_eq!(resp.status(), status, "{path}");
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            assert!(body.is_empty(), "{path}");
        }
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_routing() {
        let state = Arc::new(AppState::for_tests(vec![]));
        let resp = handle_request(get("/deny?x=1"), state).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
