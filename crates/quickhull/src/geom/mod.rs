//! Integer planar geometry for QuickHull.
//!
//! Purpose
//! - Exact orientation tests on `i64` coordinates (no epsilons).
//! - The partition and furthest-point primitives the hull driver calls per node.
//!
//! Conventions
//! - Screen-style coordinates: +y points down. A negative `orientation_sign`
//!   puts the tested point on the "outer" side of a directed segment, which is
//!   the side hull edges are searched on.
//! - Candidate sets are kept sorted lexicographically (x, then y) so that
//!   tie-breaking is reproducible.

mod partition;
mod predicates;
mod types;

pub use partition::{partition_outside, select_furthest, sort_lexicographic};
pub use predicates::{extremal_distance, orientation_sign, Side};
pub use types::Point;
