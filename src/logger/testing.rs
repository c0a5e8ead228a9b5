// In-memory log capture for handler and logger tests

use std::sync::{Arc, Mutex};

use super::format::Level;
use super::writer::{LogSink, Logger};

/// Sink that keeps lines in memory
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Every line written so far, timestamps included
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Lines with the leading timestamp removed: `[TAG] rest`
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| line.split_once(' ').map_or("", |(_, rest)| rest).to_string())
            .collect()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Logger at TRACE writing into a fresh capture sink
pub fn capturing_logger() -> (Arc<Logger>, CaptureSink) {
    let sink = CaptureSink::default();
    let logger = Arc::new(Logger::new(Box::new(sink.clone()), Level::Trace));
    (logger, sink)
}
