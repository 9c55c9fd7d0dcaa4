//! Attribute predicates over linked close approaches
//!
//! Each predicate reads one attribute of a close approach (or its linked NEO)
//! and compares it against a reference value: `extract(approach) OP value`.
//! The set of attributes is closed, so evaluation is a single exhaustive
//! match.

use std::fmt;

use chrono::NaiveDate;

use crate::model::{LinkedApproach, NearEarthObject};

use super::errors::{FilterError, FilterResult};

/// Binary relational operator applied as `actual OP reference`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// actual == reference
    Eq,
    /// actual <= reference
    Le,
    /// actual >= reference
    Ge,
}

impl Comparator {
    /// Applies the operator. Any comparison involving NaN is false.
    pub fn compare<T: PartialOrd>(&self, actual: &T, reference: &T) -> bool {
        match self {
            Comparator::Eq => actual == reference,
            Comparator::Le => actual <= reference,
            Comparator::Ge => actual >= reference,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A comparator paired with its reference value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<T> {
    pub op: Comparator,
    pub value: T,
}

impl<T: PartialOrd> Comparison<T> {
    pub fn new(op: Comparator, value: T) -> Self {
        Self { op, value }
    }

    pub fn matches(&self, actual: &T) -> bool {
        self.op.compare(actual, &self.value)
    }
}

/// A predicate over one attribute of a linked close approach
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeFilter {
    /// Calendar date of the approach (time truncated to the day)
    Date(Comparison<NaiveDate>),
    /// Relative approach velocity in km/s
    Velocity(Comparison<f64>),
    /// Diameter of the linked NEO in km
    Diameter(Comparison<f64>),
    /// Nominal approach distance in au
    Distance(Comparison<f64>),
    /// Hazardous flag of the linked NEO
    Hazardous(Comparison<bool>),
}

impl AttributeFilter {
    pub fn date(op: Comparator, value: NaiveDate) -> Self {
        AttributeFilter::Date(Comparison::new(op, value))
    }

    pub fn velocity(op: Comparator, value: f64) -> Self {
        AttributeFilter::Velocity(Comparison::new(op, value))
    }

    pub fn diameter(op: Comparator, value: f64) -> Self {
        AttributeFilter::Diameter(Comparison::new(op, value))
    }

    pub fn distance(op: Comparator, value: f64) -> Self {
        AttributeFilter::Distance(Comparison::new(op, value))
    }

    pub fn hazardous(op: Comparator, value: bool) -> Self {
        AttributeFilter::Hazardous(Comparison::new(op, value))
    }

    /// Name of the attribute this predicate reads
    pub fn attribute(&self) -> &'static str {
        match self {
            AttributeFilter::Date(_) => "date",
            AttributeFilter::Velocity(_) => "velocity",
            AttributeFilter::Diameter(_) => "diameter",
            AttributeFilter::Distance(_) => "distance",
            AttributeFilter::Hazardous(_) => "hazardous",
        }
    }

    /// Evaluates the predicate against a linked approach.
    ///
    /// An approach with unknown time never matches a date predicate.
    /// Diameter and hazardous predicates fail with `NEO_UNLINKED_APPROACH`
    /// when the approach has no linked NEO.
    pub fn evaluate(&self, linked: &LinkedApproach<'_>) -> FilterResult<bool> {
        let approach = linked.approach;
        let matched = match self {
            AttributeFilter::Date(c) => approach.date().is_some_and(|date| c.matches(&date)),
            AttributeFilter::Velocity(c) => c.matches(&approach.velocity()),
            AttributeFilter::Distance(c) => c.matches(&approach.distance()),
            AttributeFilter::Diameter(c) => c.matches(&self.linked_neo(linked)?.diameter()),
            AttributeFilter::Hazardous(c) => c.matches(&self.linked_neo(linked)?.hazardous()),
        };
        Ok(matched)
    }

    fn linked_neo<'a>(&self, linked: &LinkedApproach<'a>) -> FilterResult<&'a NearEarthObject> {
        linked
            .neo
            .ok_or_else(|| FilterError::unlinked_approach(self.attribute(), linked.approach.designation()))
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeFilter::Date(c) => write!(f, "date {} {}", c.op, c.value),
            AttributeFilter::Velocity(c) => write!(f, "velocity {} {}", c.op, c.value),
            AttributeFilter::Diameter(c) => write!(f, "diameter {} {}", c.op, c.value),
            AttributeFilter::Distance(c) => write!(f, "distance {} {}", c.op, c.value),
            AttributeFilter::Hazardous(c) => write!(f, "hazardous {} {}", c.op, c.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterErrorCode;
    use crate::model::time::cd_to_datetime;
    use crate::model::CloseApproach;

    fn eros() -> NearEarthObject {
        NearEarthObject::new("433", Some("Eros".to_string()), 16.84, false)
    }

    fn approach_at(cd: &str) -> CloseApproach {
        CloseApproach::new("433", Some(cd_to_datetime(cd).unwrap()), 0.15, 5.1)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_comparator_semantics() {
        assert!(Comparator::Eq.compare(&1.0, &1.0));
        assert!(Comparator::Le.compare(&1.0, &2.0));
        assert!(!Comparator::Le.compare(&3.0, &2.0));
        assert!(Comparator::Ge.compare(&2.0, &2.0));
        assert!(!Comparator::Ge.compare(&1.0, &2.0));
    }

    #[test]
    fn test_nan_never_compares() {
        for op in [Comparator::Eq, Comparator::Le, Comparator::Ge] {
            assert!(!op.compare(&f64::NAN, &1.0));
        }
    }

    #[test]
    fn test_date_truncates_time() {
        let neo = eros();
        let ca = approach_at("2020-Jan-01 23:59");
        let linked = LinkedApproach::new(&ca, Some(&neo));

        let filter = AttributeFilter::date(Comparator::Eq, day(2020, 1, 1));
        assert!(filter.evaluate(&linked).unwrap());

        let filter = AttributeFilter::date(Comparator::Eq, day(2020, 1, 2));
        assert!(!filter.evaluate(&linked).unwrap());
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let neo = eros();
        let ca = approach_at("2020-Jan-01 00:00");
        let linked = LinkedApproach::new(&ca, Some(&neo));

        assert!(AttributeFilter::date(Comparator::Ge, day(2020, 1, 1))
            .evaluate(&linked)
            .unwrap());
        assert!(AttributeFilter::date(Comparator::Le, day(2020, 1, 1))
            .evaluate(&linked)
            .unwrap());
        assert!(!AttributeFilter::date(Comparator::Ge, day(2020, 1, 2))
            .evaluate(&linked)
            .unwrap());
    }

    #[test]
    fn test_date_unknown_time_never_matches() {
        let ca = CloseApproach::new("433", None, 0.15, 5.1);
        let neo = eros();
        let linked = LinkedApproach::new(&ca, Some(&neo));
        for op in [Comparator::Eq, Comparator::Le, Comparator::Ge] {
            assert!(!AttributeFilter::date(op, day(2020, 1, 1))
                .evaluate(&linked)
                .unwrap());
        }
    }

    #[test]
    fn test_approach_attributes() {
        let neo = eros();
        let ca = approach_at("2020-Jan-01 00:00");
        let linked = LinkedApproach::new(&ca, Some(&neo));

        assert!(AttributeFilter::distance(Comparator::Le, 0.2)
            .evaluate(&linked)
            .unwrap());
        assert!(!AttributeFilter::distance(Comparator::Le, 0.1)
            .evaluate(&linked)
            .unwrap());
        assert!(AttributeFilter::velocity(Comparator::Ge, 5.0)
            .evaluate(&linked)
            .unwrap());
        assert!(!AttributeFilter::velocity(Comparator::Ge, 6.0)
            .evaluate(&linked)
            .unwrap());
    }

    #[test]
    fn test_neo_attributes() {
        let neo = eros();
        let ca = approach_at("2020-Jan-01 00:00");
        let linked = LinkedApproach::new(&ca, Some(&neo));

        assert!(AttributeFilter::diameter(Comparator::Ge, 10.0)
            .evaluate(&linked)
            .unwrap());
        assert!(AttributeFilter::hazardous(Comparator::Eq, false)
            .evaluate(&linked)
            .unwrap());
        assert!(!AttributeFilter::hazardous(Comparator::Eq, true)
            .evaluate(&linked)
            .unwrap());
    }

    #[test]
    fn test_unknown_diameter_never_matches() {
        let neo = NearEarthObject::new("2020 AB", None, f64::NAN, false);
        let ca = CloseApproach::new("2020 AB", None, 0.01, 10.0);
        let linked = LinkedApproach::new(&ca, Some(&neo));

        assert!(!AttributeFilter::diameter(Comparator::Ge, 0.0)
            .evaluate(&linked)
            .unwrap());
        assert!(!AttributeFilter::diameter(Comparator::Le, 1000.0)
            .evaluate(&linked)
            .unwrap());
    }

    #[test]
    fn test_unlinked_neo_attribute_fails_fast() {
        let ca = CloseApproach::new("2099 ZZ", None, 0.01, 10.0);
        let linked = LinkedApproach::new(&ca, None);

        let err = AttributeFilter::diameter(Comparator::Ge, 1.0)
            .evaluate(&linked)
            .unwrap_err();
        assert_eq!(err.code(), FilterErrorCode::NeoUnlinkedApproach);
        assert!(err.is_fatal());

        let err = AttributeFilter::hazardous(Comparator::Eq, false)
            .evaluate(&linked)
            .unwrap_err();
        assert_eq!(err.designation(), "2099 ZZ");
    }

    #[test]
    fn test_unlinked_approach_attributes_still_evaluate() {
        let ca = CloseApproach::new("2099 ZZ", None, 0.01, 10.0);
        let linked = LinkedApproach::new(&ca, None);

        assert!(AttributeFilter::distance(Comparator::Le, 0.05)
            .evaluate(&linked)
            .unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AttributeFilter::distance(Comparator::Le, 0.1).to_string(),
            "distance <= 0.1"
        );
        assert_eq!(
            AttributeFilter::date(Comparator::Ge, day(2020, 1, 1)).to_string(),
            "date >= 2020-01-01"
        );
        assert_eq!(
            AttributeFilter::hazardous(Comparator::Eq, true).to_string(),
            "hazardous == true"
        );
    }
}
