//! Near-Earth object records

use std::fmt;

use super::record::NeoRecord;

/// A near-Earth object (NEO)
///
/// An NEO carries its primary designation (required, unique), an optional IAU
/// name, a diameter in kilometers (NaN when unknown) and whether it is marked
/// potentially hazardous.
///
/// Close approaches are linked by `NeoDatabase` after construction. The NEO
/// only stores their positions in the database's approach collection.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    pub(crate) approaches: Vec<usize>,
}

impl NearEarthObject {
    /// Creates an unlinked NEO.
    ///
    /// An empty name is normalized to `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Rebuilds an unlinked NEO from its exported mapping
    pub fn from_record(record: NeoRecord) -> Self {
        Self::new(
            record.designation,
            Some(record.name),
            record.diameter_km,
            record.potentially_hazardous,
        )
    }

    /// Primary designation, the join key for close approaches
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, NaN if unknown
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Positions of this NEO's close approaches in the owning database,
    /// in dataset order
    pub fn approach_indices(&self) -> &[usize] {
        &self.approaches
    }

    /// Designation plus name in parentheses, when named
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Output mapping consumed by the exporters
    pub fn to_record(&self) -> NeoRecord {
        NeoRecord {
            name: self.name.clone().unwrap_or_default(),
            designation: self.designation.clone(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        if self.has_known_diameter() {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.fullname(),
                self.diameter,
                hazard
            )
        } else {
            write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous.",
                self.fullname(),
                hazard
            )
        }
    }
}
