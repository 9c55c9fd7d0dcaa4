//! Dataset loaders
//!
//! Produce unlinked records ready for `NeoDatabase::new`:
//! - NEOs from the CSV dataset
//! - Close approaches from the JSON dataset
//!
//! Malformed numbers and dates are reported, never repaired.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, read_approaches};
pub use errors::{LoaderError, LoaderResult};
pub use neos::{load_neos, read_neos};
