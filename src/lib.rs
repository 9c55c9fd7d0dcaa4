//! neodb - A deterministic in-memory database of near-Earth objects
//!
//! Loads NEOs (CSV) and their close approaches (JSON), links them once by
//! designation, and answers exact lookups and lazy filtered queries.
//!
//! ```ignore
//! use neodb::database::NeoDatabase;
//! use neodb::filters::{create_filters, limit, Criteria};
//! use neodb::loader::{load_approaches, load_neos};
//!
//! let db = NeoDatabase::new(load_neos("data/neos.csv")?, load_approaches("data/cad.json")?);
//! let filters = create_filters(&Criteria { distance_max: Some(0.1), ..Criteria::default() });
//! for approach in limit(db.query(&filters), Some(10)) {
//!     println!("{}", approach?);
//! }
//! ```

pub mod cli;
pub mod database;
pub mod filters;
pub mod loader;
pub mod model;
pub mod observability;
pub mod writer;
