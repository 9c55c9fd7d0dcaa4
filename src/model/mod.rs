//! Record types for near-Earth objects and their close approaches
//!
//! Records are plain data holders. Links between them are positions into the
//! collections owned by `NeoDatabase`, so there are no ownership cycles.

mod approach;
mod linked;
mod neo;
mod record;
pub mod time;

pub use approach::CloseApproach;
pub use linked::LinkedApproach;
pub use neo::NearEarthObject;
pub use record::{ApproachRecord, NeoRecord};

pub(crate) use record::unknown_as_null;
