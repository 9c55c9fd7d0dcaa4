//! CLI command implementations
//!
//! Each run loads both datasets, links them once, then serves a single
//! command. Output goes to the supplied writer; logs go to stderr.

use std::io::{self, Write};
use std::path::Path;

use crate::database::{NeoDatabase, Query};
use crate::filters::{create_filters, limit};
use crate::loader::{load_approaches, load_neos};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::writer::write_results;

use super::args::{Cli, Command, InspectArgs, QueryArgs};
use super::config::Config;
use super::errors::{CliError, CliErrorCode, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdout = io::stdout();
    run_cli(cli, &mut stdout.lock())
}

/// Runs a parsed command line, writing command output to `out`
pub fn run_cli<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;
    Logger::set_min_severity(config.log_severity()?);

    let neo_path = cli.neofile.unwrap_or_else(|| config.neo_path.clone());
    let cad_path = cli.cadfile.unwrap_or_else(|| config.cad_path.clone());
    let db = open_database(&neo_path, &cad_path)?;

    run_command(&db, &config, cli.command, out)
}

/// Run the appropriate command against a linked database
pub fn run_command<W: Write>(
    db: &NeoDatabase,
    config: &Config,
    cmd: Command,
    out: &mut W,
) -> CliResult<()> {
    match cmd {
        Command::Inspect(args) => inspect(db, &args, out),
        Command::Query(args) => query(db, config, &args, out),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    match path {
        Some(path) => {
            let config = Config::load(path)?;
            let display = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", display.as_str())]);
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Loads both datasets and links them
pub fn open_database(neo_path: &Path, cad_path: &Path) -> CliResult<NeoDatabase> {
    let neos = load_neos(neo_path)?;
    let approaches = load_approaches(cad_path)?;
    Ok(NeoDatabase::new(neos, approaches))
}

/// Prints one NEO found by designation or name.
///
/// A name shared by several NEOs prints each of them.
pub fn inspect<W: Write>(db: &NeoDatabase, args: &InspectArgs, out: &mut W) -> CliResult<()> {
    let found: Vec<_> = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_by_designation(pdes).into_iter().collect(),
        (None, Some(name)) => db.get_all_by_name(name).collect(),
        (None, None) => return Err(CliError::config_error("inspect needs --pdes or --name")),
    };

    if found.is_empty() {
        writeln!(out, "No matching NEOs exist in the database.")?;
        return Ok(());
    }

    for neo in found {
        writeln!(out, "{}", neo)?;
        if args.verbose {
            for approach in db.approaches_of(neo) {
                writeln!(out, "- {}", db.link(approach))?;
            }
        }
    }
    Ok(())
}

/// Runs a filtered query and prints or exports the results.
///
/// Printed output is capped at `--limit`, or the configured default when no
/// limit is given. Exports are capped only by an explicit `--limit`.
pub fn query<W: Write>(
    db: &NeoDatabase,
    config: &Config,
    args: &QueryArgs,
    out: &mut W,
) -> CliResult<()> {
    let filters = create_filters(&args.criteria());
    let filter_count = filters.len().to_string();
    log_event_with_fields(Event::QueryStart, &[("filters", filter_count.as_str())]);

    let results = db.query(&filters);
    let outcome = match &args.outfile {
        Some(path) => export(results, args.limit, path),
        None => print_results(results, args.limit.or(Some(config.default_limit)), out),
    };

    match &outcome {
        Ok(count) => {
            let count = count.to_string();
            log_event_with_fields(Event::QueryComplete, &[("results", count.as_str())]);
        }
        Err(e) => {
            log_event_with_fields(failure_event(e), &[("error", e.message())]);
        }
    }
    outcome.map(|_| ())
}

/// Event logged when a query command fails: a halted query stream is
/// `QUERY_FAILED`, anything that went wrong writing results is `EXPORT_FAILED`
fn failure_event(err: &CliError) -> Event {
    match err.code() {
        CliErrorCode::QueryFailed => Event::QueryFailed,
        _ => Event::ExportFailed,
    }
}

fn export(results: Query<'_, '_>, cap: Option<usize>, path: &Path) -> CliResult<usize> {
    Ok(write_results(limit(results, cap), path)?)
}

fn print_results<W: Write>(
    results: Query<'_, '_>,
    cap: Option<usize>,
    out: &mut W,
) -> CliResult<usize> {
    let mut count = 0;
    for result in limit(results, cap) {
        writeln!(out, "{}", result?)?;
        count += 1;
    }
    Ok(count)
}
