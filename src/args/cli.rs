use std::time::Duration;

use clap::Parser;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Bounded-concurrency HTTP request dispatcher - sends a fixed number of GET requests in batches that never exceed the in-flight cap."
)]
pub struct DispatcherArgs {
    /// Target URL to send requests to (include http:// or https://)
    pub url: String,

    /// Total number of requests to send
    pub requests: u64,

    /// Number of concurrent requests
    #[arg(long, short, default_value = DEFAULT_CONCURRENCY, value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Log elapsed time since run start for each request
    #[arg(long, short = 't')]
    pub timing: bool,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "request-timeout", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}
