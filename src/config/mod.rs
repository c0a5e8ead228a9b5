// Configuration module entry point
// Parses command-line arguments, layers configuration and builds runtime state

mod cli;
mod state;
mod types;

use std::net::SocketAddr;
use std::path::Path;

use crate::error::ServerError;

// Re-export public types
pub use cli::Cli;
pub use state::AppState;
pub use types::Config;

impl Config {
    /// Load configuration: defaults, then the optional file, then CLI overrides
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.backlog", 1024)?
            .set_default("server.keep_alive", true)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("logging.level", "trace")?
            .set_default("ready.endpoints", Vec::<String>::new())?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(config::File::from(Path::new(path)));
        }

        builder = builder
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option("server.host", cli.host.clone())?;

        // Positionals replace the file's list only when present
        if !cli.endpoints.is_empty() {
            builder = builder.set_override("ready.endpoints", cli.endpoints.clone())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}
