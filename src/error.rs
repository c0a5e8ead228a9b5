//! Startup error type
//!
//! Request handling never fails outward; only building the process can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to open log sink: {0}")]
    Logger(std::io::Error),

    #[error("failed to build runtime: {0}")]
    Runtime(std::io::Error),

    #[error("failed to build probe client: {0}")]
    Client(#[from] reqwest::Error),
}
