//! Probe module
//!
//! Outbound reachability checks used by `/reach` and `/ready`.
//! Targets are always probed one after another, in the order given.

mod report;

#[cfg(test)]
pub mod testing;

pub use report::Report;

use std::time::{Duration, Instant};

/// Outcome of a single GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 200 OK
    Ok,
    /// Any other status code
    Status(u16),
    /// The request never produced a response
    Error(String),
}

impl ProbeOutcome {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Report marker: `200`, the three-digit status, or `ERR`
    pub fn marker(&self) -> String {
        match self {
            Self::Ok => "200".to_string(),
            Self::Status(code) => format!("{code:03}"),
            Self::Error(_) => "ERR".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
    /// Time until the response head arrived or the request failed
    pub elapsed: Duration,
}

/// Sequential HTTP prober sharing one client across requests
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Issue one GET and classify the result.
    ///
    /// The body is drained after timing so the connection is done with
    /// before the caller moves on.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();
        let response = self.client.get(url).send().await;
        let elapsed = start.elapsed();

        let outcome = match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                // The status is already known; a body that fails mid-read
                // does not change the outcome
                let _ = resp.bytes().await;
                if status == 200 {
                    ProbeOutcome::Ok
                } else {
                    ProbeOutcome::Status(status)
                }
            }
            Err(e) => ProbeOutcome::Error(e.to_string()),
        };

        ProbeResult {
            url: url.to_string(),
            outcome,
            elapsed,
        }
    }

    /// Probe every target in order; probe N+1 starts after probe N is finished
    pub async fn probe_all<'a, I>(&self, urls: I) -> Vec<ProbeResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut results = Vec::new();
        for url in urls {
            results.push(self.probe(url).await);
        }
        results
    }
}
