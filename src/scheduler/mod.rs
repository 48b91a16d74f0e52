//! Degree plan scheduling core.
//!
//! Two pieces, leaves first: [`sequence`] turns a start term into the ordered
//! term skeleton, and [`placement`] greedily fills that skeleton from a
//! degree catalog, honoring prerequisite ordering and the per-term credit
//! cap. Both are pure functions of their inputs; all I/O lives in the
//! surrounding layers.

pub mod placement;
pub mod sequence;

pub use placement::{schedule_plan, DEFAULT_HORIZON};
pub use sequence::generate_terms;
