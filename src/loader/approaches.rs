//! Close approach dataset (JSON) reader
//!
//! The file holds a `fields` array naming each column and a `data` array of
//! rows. Columns are located by name: `des`, `cd`, `dist`, `v_rel`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::time::cd_to_datetime;
use crate::model::CloseApproach;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{LoaderError, LoaderResult};

#[derive(Debug, Deserialize)]
struct CadFile {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Column positions of the fields we read
struct Columns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl Columns {
    fn locate(fields: &[String]) -> LoaderResult<Self> {
        let find = |name: &'static str| {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or(LoaderError::MissingField(name))
        };
        Ok(Self {
            designation: find("des")?,
            time: find("cd")?,
            distance: find("dist")?,
            velocity: find("v_rel")?,
        })
    }
}

/// Reads close approaches from a JSON file
pub fn load_approaches(path: impl AsRef<Path>) -> LoaderResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    log_event_with_fields(Event::DatasetLoadStart, &[("path", display.as_str())]);

    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: display.clone(),
        source,
    })?;
    let approaches = read_approaches(BufReader::new(file))?;

    let count = approaches.len().to_string();
    log_event_with_fields(
        Event::DatasetLoaded,
        &[("path", display.as_str()), ("records", count.as_str())],
    );
    Ok(approaches)
}

/// Reads close approaches from JSON text
pub fn read_approaches<R: Read>(reader: R) -> LoaderResult<Vec<CloseApproach>> {
    let cad: CadFile = serde_json::from_reader(reader)?;
    let columns = Columns::locate(&cad.fields)?;

    cad.data
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i + 1, row, &columns))
        .collect()
}

static MISSING: Value = Value::Null;

fn parse_row(record: usize, row: &[Value], columns: &Columns) -> LoaderResult<CloseApproach> {
    let cell = |index: usize| row.get(index).unwrap_or(&MISSING);

    let designation = match cell(columns.designation) {
        Value::String(s) => s.clone(),
        other => return Err(LoaderError::invalid(record, "des", other.to_string())),
    };

    let time = match cell(columns.time) {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(
            cd_to_datetime(s).map_err(|_| LoaderError::invalid(record, "cd", s.as_str()))?,
        ),
        other => return Err(LoaderError::invalid(record, "cd", other.to_string())),
    };

    let distance = parse_number(record, "dist", cell(columns.distance))?;
    let velocity = parse_number(record, "v_rel", cell(columns.velocity))?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

/// Numbers arrive as strings in the source data; plain JSON numbers are
/// accepted too.
fn parse_number(record: usize, field: &'static str, value: &Value) -> LoaderResult<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| LoaderError::invalid(record, field, value.to_string()))
}
