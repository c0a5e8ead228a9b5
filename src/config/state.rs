// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::logger::Logger;
use crate::probe::Prober;

/// Application state
pub struct AppState {
    pub config: Config,
    pub prober: Prober,
    /// Request-level log output
    pub logger: Arc<Logger>,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config, prober: Prober, logger: Arc<Logger>) -> Self {
        Self {
            config,
            prober,
            logger,
            active_connections: AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// Default configuration with the given `/ready` endpoints
    pub fn for_tests(endpoints: Vec<String>) -> Self {
        Self::capturing(endpoints).0
    }

    /// Like [`AppState::for_tests`], also returning the sink that receives
    /// every request-level log line
    pub fn capturing(endpoints: Vec<String>) -> (Self, crate::logger::testing::CaptureSink) {
        let mut config = Config::load(&super::Cli::default()).expect("default config");
        config.ready.endpoints = endpoints;
        let (logger, sink) = crate::logger::testing::capturing_logger();
        let state = Self::new(config, Prober::new().expect("probe client"), logger);
        (state, sink)
    }
}
