//! Row shapes for exported results

use serde::{Deserialize, Serialize};

use crate::model::{unknown_as_null, ApproachRecord, LinkedApproach, NeoRecord};

/// Column order of CSV exports
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// One CSV line: an approach and its NEO, flattened.
///
/// An unlinked approach keeps its join key as designation and leaves the NEO
/// columns empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: String,
    #[serde(with = "unknown_as_null")]
    pub diameter_km: f64,
    pub potentially_hazardous: Option<bool>,
}

impl CsvRow {
    pub fn from_linked(linked: &LinkedApproach<'_>) -> Self {
        let approach = linked.approach.to_record();
        match linked.neo.map(|neo| neo.to_record()) {
            Some(neo) => Self {
                datetime_utc: approach.datetime_utc,
                distance_au: approach.distance_au,
                velocity_km_s: approach.velocity_km_s,
                designation: neo.designation,
                name: neo.name,
                diameter_km: neo.diameter_km,
                potentially_hazardous: Some(neo.potentially_hazardous),
            },
            None => Self {
                datetime_utc: approach.datetime_utc,
                distance_au: approach.distance_au,
                velocity_km_s: approach.velocity_km_s,
                designation: linked.approach.designation().to_string(),
                name: String::new(),
                diameter_km: f64::NAN,
                potentially_hazardous: None,
            },
        }
    }

    /// Splits the row back into its approach and NEO mappings
    pub fn into_records(self) -> (ApproachRecord, Option<NeoRecord>) {
        let approach = ApproachRecord {
            datetime_utc: self.datetime_utc,
            distance_au: self.distance_au,
            velocity_km_s: self.velocity_km_s,
        };
        let neo = self.potentially_hazardous.map(|hazardous| NeoRecord {
            name: self.name,
            designation: self.designation,
            diameter_km: self.diameter_km,
            potentially_hazardous: hazardous,
        });
        (approach, neo)
    }
}

/// One element of a JSON export: approach fields plus a nested `neo`
/// object (`null` for an unlinked approach)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonEntry {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: Option<NeoRecord>,
}

impl JsonEntry {
    pub fn from_linked(linked: &LinkedApproach<'_>) -> Self {
        let approach = linked.approach.to_record();
        Self {
            datetime_utc: approach.datetime_utc,
            distance_au: approach.distance_au,
            velocity_km_s: approach.velocity_km_s,
            neo: linked.neo.map(|neo| neo.to_record()),
        }
    }

    /// Approach fields of this entry
    pub fn approach_record(&self) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.datetime_utc.clone(),
            distance_au: self.distance_au,
            velocity_km_s: self.velocity_km_s,
        }
    }
}
