//! Logger module
//!
//! Provides logging utilities for the server:
//! - Severity-tagged, timestamped lines
//! - Pluggable sink (stderr or file)
//! - Request trace lines in `key=value` form

mod format;
pub mod writer;

#[cfg(test)]
pub mod testing;

use format::Level;
use writer::{FileSink, LogSink, StderrSink};

pub use writer::Logger;

use crate::config::Config;
use std::net::SocketAddr;
use std::sync::Arc;

/// Initialize the logger with configuration
///
/// Should be called once at application startup. The returned handle is
/// the same logger that was installed globally.
pub fn init(config: &Config) -> std::io::Result<Arc<Logger>> {
    let min_level = config
        .logging
        .level
        .parse::<Level>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let sink: Box<dyn LogSink> = match config.logging.file.as_deref() {
        Some(path) => Box::new(FileSink::open(path)?),
        None => Box::new(StderrSink),
    };

    let logger = Arc::new(Logger::new(sink, min_level));
    writer::install(Arc::clone(&logger))?;
    Ok(logger)
}

/// Write a message whose first token is its severity keyword
pub fn write_tagged(message: &str) {
    match writer::get() {
        Some(logger) => logger.write_tagged(message),
        None => eprintln!("{}", format::format_line(chrono::Utc::now(), message)),
    }
}

fn log(level: Level, message: &str) {
    write_tagged(&format!("{level} {message}"));
}

pub fn log_serving(addr: &SocketAddr) {
    log(Level::Info, &format!("msg=\"serving at {addr}\""));
}

pub fn log_shutdown(signal: &str) {
    log(Level::Info, &format!("msg=\"shutting down\" signal={signal}"));
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    log(Level::Warn, &format!("msg=\"failed to serve connection\" error=\"{err}\""));
}

pub fn log_warning(message: &str) {
    log(Level::Warn, &format!("msg=\"{message}\""));
}

pub fn log_error(message: &str) {
    log(Level::Error, &format!("msg=\"{message}\""));
}
