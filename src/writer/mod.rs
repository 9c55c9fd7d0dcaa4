//! Result exporters
//!
//! Consume a query stream and write CSV or JSON. The output format is chosen
//! from the file extension by [`write_results`].

mod csv_writer;
mod errors;
mod json_writer;
mod rows;

use std::fs;
use std::path::Path;

use crate::filters::FilterResult;
use crate::model::LinkedApproach;
use crate::observability::{log_event_with_fields, Event};

pub use csv_writer::{write_csv, write_to_csv};
pub use errors::{WriterError, WriterResult};
pub use json_writer::{write_json, write_to_json};
pub use rows::{CsvRow, JsonEntry, CSV_FIELDS};

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Picks the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> WriterResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(WriterError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes results to `path` in the format its extension names.
///
/// If writing fails after the file was created, the partial file is removed.
pub fn write_results<'a, I>(results: I, path: impl AsRef<Path>) -> WriterResult<usize>
where
    I: IntoIterator<Item = FilterResult<LinkedApproach<'a>>>,
{
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let written = match format {
        OutputFormat::Csv => write_to_csv(results, path),
        OutputFormat::Json => write_to_json(results, path),
    };
    let count = match written {
        Ok(count) => count,
        Err(e) => {
            if !matches!(e, WriterError::Create { .. }) {
                let _ = fs::remove_file(path);
            }
            return Err(e);
        }
    };

    let display = path.display().to_string();
    let written = count.to_string();
    log_event_with_fields(
        Event::ExportComplete,
        &[
            ("format", format.as_str()),
            ("path", display.as_str()),
            ("records", written.as_str()),
        ],
    );
    Ok(count)
}
