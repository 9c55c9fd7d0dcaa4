//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up one NEO by designation or name
//! - query: Filtered, limited close approach search with optional export

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, InspectArgs, QueryArgs};
pub use commands::{inspect, open_database, query, run, run_cli, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
