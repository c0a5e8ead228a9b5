//! Log writer module
//!
//! Log lines go through a [`LogSink`]. The logger built at startup is
//! installed globally for process-level messages and also handed to the
//! request handlers through the application state.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Utc;

use super::format::{format_line, split_tag, Level};

/// Global logger instance
static LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Destination for fully formatted log lines
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes each line to stderr
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Appends each line to a file
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Open or create a log file for appending
    pub fn open(path: &str) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut f) = self.file.lock() {
            let _ = writeln!(f, "{line}");
        }
    }
}

/// Timestamping front end over a sink, with a minimum level
pub struct Logger {
    sink: Box<dyn LogSink>,
    min_level: Level,
}

impl Logger {
    pub fn new(sink: Box<dyn LogSink>, min_level: Level) -> Self {
        Self { sink, min_level }
    }

    /// Format and write a message whose first token is its severity.
    ///
    /// Tags that are not a known level bypass the level filter.
    pub fn write_tagged(&self, message: &str) {
        let (tag, _) = split_tag(message);
        if let Ok(level) = tag.parse::<Level>() {
            if level < self.min_level {
                return;
            }
        }
        self.sink.write_line(&format_line(Utc::now(), message));
    }

    pub fn log(&self, level: Level, message: &str) {
        self.write_tagged(&format!("{level} {message}"));
    }

    /// Trace line emitted once a handler has produced its response
    pub fn trace_endpoint(&self, endpoint: &str) {
        self.log(Level::Trace, &format!("endpoint={endpoint}"));
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn warn_endpoint(&self, endpoint: &str, msg: &str) {
        self.log(Level::Warn, &format!("endpoint={endpoint} msg=\"{msg}\""));
    }
}

/// Install the global logger
///
/// Returns an error if one is already installed.
pub fn install(logger: Arc<Logger>) -> io::Result<()> {
    LOGGER.set(logger).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Logger already initialized",
        )
    })
}

/// Get the global logger, if installed
pub fn get() -> Option<&'static Arc<Logger>> {
    LOGGER.get()
}
