//! NEO dataset (CSV) reader
//!
//! Uses the `pdes`, `name`, `diameter` and `pha` columns; other columns are
//! ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::NearEarthObject;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{LoaderError, LoaderResult};

/// One row of the NEO dataset
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

impl NeoRow {
    fn into_neo(self, record: usize) -> LoaderResult<NearEarthObject> {
        let diameter = match self.diameter.trim() {
            "" => f64::NAN,
            raw => raw
                .parse()
                .map_err(|_| LoaderError::invalid(record, "diameter", raw))?,
        };
        Ok(NearEarthObject::new(
            self.pdes,
            Some(self.name),
            diameter,
            self.pha.trim() == "Y",
        ))
    }
}

/// Reads NEOs from a CSV file
pub fn load_neos(path: impl AsRef<Path>) -> LoaderResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    log_event_with_fields(Event::DatasetLoadStart, &[("path", display.as_str())]);

    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: display.clone(),
        source,
    })?;
    let neos = read_neos(file)?;

    let count = neos.len().to_string();
    log_event_with_fields(
        Event::DatasetLoaded,
        &[("path", display.as_str()), ("records", count.as_str())],
    );
    Ok(neos)
}

/// Reads NEOs from CSV text with a header row
pub fn read_neos<R: Read>(reader: R) -> LoaderResult<Vec<NearEarthObject>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut neos = Vec::new();
    for (record, row) in reader.deserialize::<NeoRow>().enumerate() {
        neos.push(row?.into_neo(record + 1)?);
    }
    Ok(neos)
}
