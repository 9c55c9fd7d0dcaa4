//! Output field mappings for NEOs and close approaches
//!
//! Exporters write these records; reading them back reproduces designation,
//! distance and velocity exactly. An unnamed NEO maps to an empty name and an
//! unknown diameter maps to an empty/null value.

use serde::{Deserialize, Serialize};

/// Exported fields of a near-Earth object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    /// IAU name, empty if unnamed
    pub name: String,
    /// Primary designation
    pub designation: String,
    /// Diameter in km, NaN when unknown
    #[serde(with = "unknown_as_null")]
    pub diameter_km: f64,
    /// Potentially hazardous flag
    pub potentially_hazardous: bool,
}

/// Exported fields of a close approach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachRecord {
    /// Approach time as `YYYY-MM-DD hh:mm`, empty if unknown
    pub datetime_utc: String,
    /// Nominal approach distance in au
    pub distance_au: f64,
    /// Relative approach velocity in km/s
    pub velocity_km_s: f64,
}

/// Maps NaN to a missing value and back.
pub(crate) mod unknown_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
