#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use reqwest as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, build_client, init_tracing};
pub use commands::Commands;
pub use parser::Cli;
