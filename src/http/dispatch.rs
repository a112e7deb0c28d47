use std::time::{Duration, Instant};

use futures_util::future::join_all;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::args::{DispatcherArgs, PositiveUsize};
use crate::error::{AppError, AppResult, HttpError};
use crate::sinks::OutputSink;

use super::client::build_client;
use super::unit::RequestUnit;

/// Completion line emitted after the last group drains.
pub const COMPLETION_LINE: &str = "All requests sent.";

/// Parameters for one dispatch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: Url,
    pub total: u64,
    pub concurrency: PositiveUsize,
    pub timing: bool,
    pub request_timeout: Duration,
}

impl TryFrom<&DispatcherArgs> for RunConfig {
    type Error = AppError;

    fn try_from(args: &DispatcherArgs) -> Result<Self, Self::Error> {
        let endpoint = Url::parse(&args.url).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: args.url.clone(),
                source: err,
            })
        })?;
        match endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::http(HttpError::UnsupportedScheme {
                    scheme: scheme.to_owned(),
                }));
            }
        }
        Ok(Self {
            endpoint,
            total: args.requests,
            concurrency: args.concurrency,
            timing: args.timing,
            request_timeout: args.request_timeout,
        })
    }
}

/// Drives one run: owns the shared client and walks the request range in
/// bounded-size groups.
pub struct Dispatcher {
    config: RunConfig,
    client: Client,
}

impl Dispatcher {
    /// Acquire the shared HTTP client and prepare a run.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built; no request
    /// units are spawned in that case.
    pub fn new(config: RunConfig) -> AppResult<Self> {
        let client = build_client(config.request_timeout)?;
        Ok(Self { config, client })
    }

    /// Issue every request, with at most `concurrency` in flight at any
    /// instant.
    ///
    /// Sequence numbers `1..=total` are partitioned up front into
    /// consecutive groups of `concurrency`; each group drains fully before
    /// the next one starts, so group slicing is the only concurrency limit.
    /// Unit failures surface as outcome lines and never abort the run. The
    /// completion line is emitted last, exactly once.
    pub async fn run(&self, sink: &dyn OutputSink) {
        let started_at = Instant::now();
        let sequences: Vec<u64> = (1..=self.config.total).collect();

        for (group_index, group) in sequences.chunks(self.config.concurrency.get()).enumerate() {
            debug!(
                "Dispatching group {} ({} requests)",
                group_index,
                group.len()
            );
            join_all(group.iter().map(|sequence| {
                RequestUnit::new(*sequence, started_at).run(
                    &self.client,
                    &self.config.endpoint,
                    self.config.timing,
                    sink,
                )
            }))
            .await;
            debug!("Group {} drained", group_index);
        }

        sink.emit(COMPLETION_LINE);
    }
}
