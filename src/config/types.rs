// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ready: ReadyConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub backlog: u32,
    pub max_connections: Option<u64>,
    pub keep_alive: bool,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: usize,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path (optional, stderr if not set)
    #[serde(default)]
    pub file: Option<String>,
}

/// Endpoints probed by `/ready`, fixed at startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReadyConfig {
    #[serde(default)]
    pub endpoints: Vec<String>,
}
