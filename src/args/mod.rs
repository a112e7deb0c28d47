//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::DispatcherArgs;
pub use types::PositiveUsize;

pub(crate) use defaults::DEFAULT_USER_AGENT;
