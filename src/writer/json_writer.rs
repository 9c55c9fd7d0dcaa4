//! JSON export
//!
//! Output is a JSON array with one object per approach; entries are written
//! as they arrive from the stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::filters::FilterResult;
use crate::model::LinkedApproach;

use super::errors::{WriterError, WriterResult};
use super::rows::JsonEntry;

/// Writes results as a JSON array; returns the number of entries.
pub fn write_json<'a, I, W>(results: I, mut writer: W) -> WriterResult<usize>
where
    I: IntoIterator<Item = FilterResult<LinkedApproach<'a>>>,
    W: Write,
{
    writer.write_all(b"[")?;

    let mut count = 0;
    for result in results {
        let entry = JsonEntry::from_linked(&result?);
        let separator: &[u8] = if count == 0 { b"\n  " } else { b",\n  " };
        writer.write_all(separator)?;
        serde_json::to_writer(&mut writer, &entry)?;
        count += 1;
    }

    let closing: &[u8] = if count == 0 { b"]\n" } else { b"\n]\n" };
    writer.write_all(closing)?;
    writer.flush()?;
    Ok(count)
}

/// Writes results to a JSON file at `path`
pub fn write_to_json<'a, I>(results: I, path: impl AsRef<Path>) -> WriterResult<usize>
where
    I: IntoIterator<Item = FilterResult<LinkedApproach<'a>>>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WriterError::Create {
        path: path.display().to_string(),
        source,
    })?;
    write_json(results, BufWriter::new(file))
}
