//! CSV export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::filters::FilterResult;
use crate::model::LinkedApproach;

use super::errors::{WriterError, WriterResult};
use super::rows::{CsvRow, CSV_FIELDS};

/// Writes results as CSV with a header row; returns the number of rows.
///
/// The header is written even when there are no results.
pub fn write_csv<'a, I, W>(results: I, writer: W) -> WriterResult<usize>
where
    I: IntoIterator<Item = FilterResult<LinkedApproach<'a>>>,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_FIELDS)?;

    let mut count = 0;
    for result in results {
        writer.serialize(CsvRow::from_linked(&result?))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Writes results to a CSV file at `path`
pub fn write_to_csv<'a, I>(results: I, path: impl AsRef<Path>) -> WriterResult<usize>
where
    I: IntoIterator<Item = FilterResult<LinkedApproach<'a>>>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WriterError::Create {
        path: path.display().to_string(),
        source,
    })?;
    write_csv(results, file)
}
