use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::sinks::OutputSink;

/// One logical request in a run: its sequence number and the run-start
/// instant shared by all units for elapsed timing.
#[derive(Debug, Clone, Copy)]
pub struct RequestUnit {
    sequence: u64,
    started_at: Instant,
}

/// Terminal result of one request unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitResult {
    Status(u16),
    Failed(String),
}

/// Outcome of one request unit, rendered as a single output line.
#[derive(Debug, Clone)]
pub struct Outcome {
    sequence: u64,
    result: UnitResult,
    elapsed: Option<Duration>,
}

impl Outcome {
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub const fn result(&self) -> &UnitResult {
        &self.result
    }

    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Render this outcome in the output line format.
    #[must_use]
    pub fn to_line(&self) -> String {
        match &self.result {
            UnitResult::Status(code) => self.elapsed.map_or_else(
                || format!("Request #{} returned status {}", self.sequence, code),
                |elapsed| {
                    format!(
                        "[{:.2}s] Request #{} returned status {}",
                        elapsed.as_secs_f64(),
                        self.sequence,
                        code
                    )
                },
            ),
            UnitResult::Failed(reason) => {
                format!("Request #{} failed: {}", self.sequence, reason)
            }
        }
    }
}

impl RequestUnit {
    #[must_use]
    pub const fn new(sequence: u64, started_at: Instant) -> Self {
        Self {
            sequence,
            started_at,
        }
    }

    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Issue one GET against `endpoint` and report the outcome on `sink`
    /// before returning it.
    ///
    /// Transport failures (connection refused, timeout, DNS, protocol
    /// errors) are captured in the returned [`Outcome`]; they never
    /// propagate and never disturb sibling units.
    pub async fn run(
        self,
        client: &Client,
        endpoint: &Url,
        timing: bool,
        sink: &dyn OutputSink,
    ) -> Outcome {
        let outcome = self.execute(client, endpoint, timing).await;
        sink.emit(&outcome.to_line());
        outcome
    }

    async fn execute(self, client: &Client, endpoint: &Url, timing: bool) -> Outcome {
        match client.get(endpoint.clone()).send().await {
            Ok(response) => Outcome {
                sequence: self.sequence,
                result: UnitResult::Status(response.status().as_u16()),
                elapsed: timing.then(|| self.started_at.elapsed()),
            },
            Err(err) => {
                debug!("Request #{} failed: {}", self.sequence, err);
                Outcome {
                    sequence: self.sequence,
                    result: UnitResult::Failed(err.to_string()),
                    elapsed: None,
                }
            }
        }
    }
}
