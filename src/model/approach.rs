//! Close approach records

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::record::ApproachRecord;
use super::time::{datetime_to_str, str_to_datetime};

/// A close approach to Earth by an NEO
///
/// Holds the approach time (UTC, minute precision), the nominal approach
/// distance in astronomical units and the relative approach velocity in
/// kilometers per second.
///
/// The NEO's designation is kept as the join key. The link to the NEO itself
/// is resolved by `NeoDatabase` and stored as a position in its NEO
/// collection.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: String,
    time: Option<NaiveDateTime>,
    distance: f64,
    velocity: f64,
    pub(crate) neo: Option<usize>,
}

impl CloseApproach {
    /// Creates an unlinked close approach
    pub fn new(
        designation: impl Into<String>,
        time: Option<NaiveDateTime>,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Rebuilds an unlinked approach from its exported mapping.
    ///
    /// The mapping does not carry the join key, so it is supplied separately.
    /// Returns `None` if `datetime_utc` is neither empty nor a valid output
    /// timestamp.
    pub fn from_record(designation: impl Into<String>, record: &ApproachRecord) -> Option<Self> {
        let time = if record.datetime_utc.is_empty() {
            None
        } else {
            Some(str_to_datetime(&record.datetime_utc).ok()?)
        };
        Some(Self::new(
            designation,
            time,
            record.distance_au,
            record.velocity_km_s,
        ))
    }

    /// Designation of the NEO this approach belongs to
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> Option<NaiveDateTime> {
        self.time
    }

    /// Calendar date of the approach, if its time is known
    pub fn date(&self) -> Option<NaiveDate> {
        self.time.map(|t| t.date())
    }

    /// Nominal approach distance in au
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Position of the linked NEO in the owning database
    pub fn neo_index(&self) -> Option<usize> {
        self.neo
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Approach time as `YYYY-MM-DD hh:mm`, or an empty string if unknown
    pub fn time_str(&self) -> String {
        self.time.as_ref().map(datetime_to_str).unwrap_or_default()
    }

    /// Output mapping consumed by the exporters
    pub fn to_record(&self) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}
