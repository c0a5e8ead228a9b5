// Plain-text probe reports
//
// One line per target, columns separated by four spaces.

use std::fmt::Write;
use std::time::Duration;

use super::ProbeResult;

const SEPARATOR: &str = "    ";
const NANOS_PER_MILLI: u128 = 1_000_000;

/// A rendered report and whether every probe returned 200
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub body: String,
    pub all_ok: bool,
}

impl Report {
    /// `<marker>    <elapsed>    <url>` per probe
    pub fn with_latency(results: &[ProbeResult]) -> Self {
        let mut body = String::new();
        for result in results {
            let _ = writeln!(
                body,
                "{}{SEPARATOR}{}{SEPARATOR}{}",
                result.outcome.marker(),
                format_elapsed(result.elapsed),
                result.url
            );
        }
        Self::finish(body, results)
    }

    /// `<marker>    <url>` per probe
    pub fn without_latency(results: &[ProbeResult]) -> Self {
        let mut body = String::new();
        for result in results {
            let _ = writeln!(body, "{}{SEPARATOR}{}", result.outcome.marker(), result.url);
        }
        Self::finish(body, results)
    }

    fn finish(body: String, results: &[ProbeResult]) -> Self {
        Self {
            body,
            all_ok: results.iter().all(|r| r.outcome.is_ok()),
        }
    }
}

/// Sub-millisecond durations as raw nanoseconds, the rest as milliseconds
/// with two decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < NANOS_PER_MILLI {
        format!("{nanos}ns")
    } else {
        #[allow(clippy::cast_precision_loss)]
        let millis = nanos as f64 / NANOS_PER_MILLI as f64;
        format!("{millis:.2}ms")
    }
}
