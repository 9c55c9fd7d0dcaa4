//! neodb CLI entry point
//!
//! Parses arguments and runs one command via `cli::run`. Errors are printed
//! to stderr and the process exits with a non-zero status.

use neodb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
