use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Build the HTTP client shared by every request unit of a run.
///
/// The client owns the connection pool for the whole run; dropping it after
/// the last group drains releases the pool.
///
/// # Errors
///
/// Returns [`HttpError::BuildClientFailed`] when the TLS backend or
/// connection pool cannot be initialized. No request units are spawned in
/// that case.
pub fn build_client(request_timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(request_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
