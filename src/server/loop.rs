// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// Returns once shutdown is requested; connections already accepted keep
/// running in their own tasks.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: &SignalHandler,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("failed to accept connection: {e}")),
                }
            }

            _ = signals.shutdown.notified() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        // A rejected connection may reset; keep whatever arrived
        let _ = stream.write_all(request.as_bytes()).await;
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf).await;
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap(), 16).unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::for_tests(vec![]));
        let signals = Arc::new(SignalHandler::new());

        let loop_signals = Arc::clone(&signals);
        let server = tokio::spawn(async move {
            start_server_loop(listener, state, &loop_signals).await;
        });

        let resp = raw_request(
            addr,
            "POST /echo HTTP/1.1\r\nHost: probe\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        )
        .await;
        assert!(resp.starts_with("HTTP/1.1 200 OK"), "{resp}");
        assert!(resp.contains("POST /echo\n"), "{resp}");
        assert!(resp.ends_with("\n\nhello"), "{resp}");

        let resp = raw_request(addr, "GET /deny HTTP/1.1\r\nHost: probe\r\nConnection: close\r\n\r\n").await;
        assert!(resp.starts_with("HTTP/1.1 400 Bad Request"), "{resp}");

        signals.shutdown.notify_one();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_limit() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap(), 16).unwrap();
        let addr = listener.local_addr().unwrap();
        let mut state = AppState::for_tests(vec![]);
        state.config.server.max_connections = Some(0);
        let state = Arc::new(state);
        let signals = Arc::new(SignalHandler::new());

        let loop_signals = Arc::clone(&signals);
        let server = tokio::spawn(async move {
            start_server_loop(listener, state, &loop_signals).await;
        });

        // Rejected connections are closed without a response
        let resp = raw_request(addr, "GET /okay HTTP/1.1\r\nHost: probe\r\n\r\n").await;
        assert!(resp.is_empty(), "{resp}");

        signals.shutdown.notify_one();
        server.await.unwrap();
    }
}
