//! HTTP request execution and batch orchestration.
mod client;
mod dispatch;
mod unit;


pub use client::build_client;
pub use dispatch::{COMPLETION_LINE, Dispatcher, RunConfig};
pub use unit::{Outcome, RequestUnit, UnitResult};
