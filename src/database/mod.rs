//! NEO database: linking and querying
//!
//! Owns NEOs and close approaches, joins them by designation once, and serves
//! exact lookups and lazy filtered queries.
//!
//! # Invariants
//!
//! - An approach is linked to exactly the NEO whose designation equals its
//!   join key, or to none
//! - A linked approach appears exactly once in its NEO's approaches
//! - Query results follow dataset order; the database is never mutated

mod database;
mod query;

pub use database::{LinkSummary, NeoDatabase};
pub use query::Query;
