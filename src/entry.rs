use clap::{CommandFactory, FromArgMatches};

use crate::args::DispatcherArgs;
use crate::error::{AppError, AppResult};
use crate::http::{Dispatcher, RunConfig};
use crate::sinks::StdoutSink;

/// Parse arguments and drive one dispatch run to completion.
///
/// # Errors
///
/// Returns an error when argument parsing, endpoint validation, client
/// construction, or runtime setup fails. Per-request failures are reported
/// as output lines and never surface here.
pub fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::system::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<DispatcherArgs> {
    let matches = DispatcherArgs::command().get_matches();
    DispatcherArgs::from_arg_matches(&matches).map_err(AppError::from)
}

async fn run_async(args: &DispatcherArgs) -> AppResult<()> {
    let config = RunConfig::try_from(args)?;
    let dispatcher = Dispatcher::new(config)?;
    dispatcher.run(&StdoutSink).await;
    Ok(())
}
