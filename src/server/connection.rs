// Connection handling module
// Accepts and serves a single TCP connection

use std::sync::atomic::Ordering;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection, enforcing the optional connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment first, then check the limit
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.server.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "max connections reached: {prev_count}/{max_conn}, rejected {peer_addr}"
            ));
            drop(stream);
            return;
        }
    }

    handle_connection(stream, Arc::clone(state));
}

/// Serve HTTP/1.1 on the stream in its own task, then release the slot
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.server.keep_alive);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}
