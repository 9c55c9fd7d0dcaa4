//! Query filters for close approaches
//!
//! - `create_filters` turns user [`Criteria`] into [`AttributeFilter`]s
//! - `AttributeFilter::evaluate` tests one attribute of a linked approach
//! - `limit` caps a result stream without draining it
//!
//! # Invariants
//!
//! - Predicates are pure: evaluation order never changes a result
//! - Unset criteria contribute no predicate
//! - NEO-dependent predicates fail loudly on unlinked approaches

mod criteria;
mod errors;
mod limit;
mod predicate;

pub use criteria::{create_filters, Criteria};
pub use errors::{FilterError, FilterErrorCode, FilterResult};
pub use limit::{limit, Limit};
pub use predicate::{AttributeFilter, Comparator, Comparison};
