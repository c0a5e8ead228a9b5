//! Log line format module
//!
//! Every message starts with a severity keyword followed by a space:
//! `"TRACE endpoint=/okay"` is rendered as
//! `2024-05-01T12:00:00.123Z [TRACE] endpoint=/okay`.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Millisecond-precision UTC timestamp
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Severity levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// Split a tagged message into its severity keyword and the remainder.
///
/// A message without a space is all tag and no remainder.
pub fn split_tag(message: &str) -> (&str, &str) {
    message.split_once(' ').unwrap_or((message, ""))
}

/// Render a tagged message as `<timestamp> [<TAG>] <rest>`
pub fn format_line(time: DateTime<Utc>, message: &str) -> String {
    let (tag, rest) = split_tag(message);
    format!(
        "{} [{}] {}",
        time.format(TIMESTAMP_FORMAT),
        tag.to_uppercase(),
        rest
    )
}
