//! Steppable QuickHull for integer point sets in the plane.
//!
//! The divide-and-conquer recursion is replaced by an explicit tree of pending
//! sub-problems plus a cursor, so a caller can advance the computation one
//! recursion node at a time and inspect the state in between.
//!
//! Layout
//! - `geom`: points, orientation predicates, partitioning, furthest point.
//! - `tree`: arena of recursion nodes with parent back-links.
//! - `driver`: `QuickHull`, the computation object exposing `step()`.
//! - `finalize`: angular ordering of the discovered hull points and text output.
//! - `input`: seeded random point clouds inside a window.

pub mod cfg;
pub mod driver;
pub mod error;
pub mod finalize;
pub mod geom;
pub mod input;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{HullCfg, RandomPointsCfg, ReferencePoint, WindowCfg};
pub use driver::{QuickHull, Visit};
pub use error::HullError;
pub use finalize::Hull;
pub use geom::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{HullCfg, RandomPointsCfg, ReferencePoint, WindowCfg};
    pub use crate::driver::QuickHull;
    pub use crate::error::HullError;
    pub use crate::finalize::{sort_counterclockwise, Hull};
    pub use crate::geom::{extremal_distance, orientation_sign, partition_outside, Point};
    pub use crate::input::random_points;
}
