//! Core library for the `volley` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, the error taxonomy, the batch dispatcher and its request
//! units, and output sinks. The primary user-facing interface is the `volley`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod entry;
pub mod error;
pub mod http;
pub mod sinks;
pub mod system;
