//! User search criteria and the filter builder

use chrono::NaiveDate;

use super::predicate::{AttributeFilter, Comparator};

/// Optional search criteria, one field per command-line option.
///
/// `None` means unconstrained. `hazardous: Some(false)` is a real constraint
/// selecting non-hazardous NEOs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Criteria {
    /// Approaches on exactly this date
    pub date: Option<NaiveDate>,
    /// Approaches on or after this date
    pub start_date: Option<NaiveDate>,
    /// Approaches on or before this date
    pub end_date: Option<NaiveDate>,
    /// Minimum nominal approach distance (au)
    pub distance_min: Option<f64>,
    /// Maximum nominal approach distance (au)
    pub distance_max: Option<f64>,
    /// Minimum relative velocity (km/s)
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity (km/s)
    pub velocity_max: Option<f64>,
    /// Minimum NEO diameter (km)
    pub diameter_min: Option<f64>,
    /// Maximum NEO diameter (km)
    pub diameter_max: Option<f64>,
    /// Required hazardous flag of the NEO
    pub hazardous: Option<bool>,
}

/// Builds one predicate per criterion that is set.
///
/// Exact date and hazardous use `Eq`; minimums and the start date use `Ge`;
/// maximums and the end date use `Le`. The predicates are conjoined by the
/// query, so their order carries no meaning.
pub fn create_filters(criteria: &Criteria) -> Vec<AttributeFilter> {
    let mut filters = Vec::new();

    if let Some(date) = criteria.date {
        filters.push(AttributeFilter::date(Comparator::Eq, date));
    }
    if let Some(start) = criteria.start_date {
        filters.push(AttributeFilter::date(Comparator::Ge, start));
    }
    if let Some(end) = criteria.end_date {
        filters.push(AttributeFilter::date(Comparator::Le, end));
    }
    if let Some(min) = criteria.distance_min {
        filters.push(AttributeFilter::distance(Comparator::Ge, min));
    }
    if let Some(max) = criteria.distance_max {
        filters.push(AttributeFilter::distance(Comparator::Le, max));
    }
    if let Some(min) = criteria.velocity_min {
        filters.push(AttributeFilter::velocity(Comparator::Ge, min));
    }
    if let Some(max) = criteria.velocity_max {
        filters.push(AttributeFilter::velocity(Comparator::Le, max));
    }
    if let Some(min) = criteria.diameter_min {
        filters.push(AttributeFilter::diameter(Comparator::Ge, min));
    }
    if let Some(max) = criteria.diameter_max {
        filters.push(AttributeFilter::diameter(Comparator::Le, max));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(AttributeFilter::hazardous(Comparator::Eq, hazardous));
    }

    filters
}
