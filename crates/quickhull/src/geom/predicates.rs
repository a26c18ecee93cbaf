//! Orientation predicates.

use super::types::Point;

/// Which side of a directed segment a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Negative orientation: hull-eligible side.
    Outer,
    Collinear,
    Inner,
}

/// Signed twice-area of triangle `(a, b, c)`.
///
/// `a.x*b.y + c.x*a.y + b.x*c.y - c.x*b.y - b.x*a.y - a.x*c.y`, equal to the
/// cross product `(b - a) × (c - a)`. Exact as long as every coordinate is
/// within `cfg::MAX_COORD`.
#[inline]
pub fn orientation_sign(a: Point, b: Point, c: Point) -> i64 {
    (a.x * b.y) + (c.x * a.y) + (b.x * c.y) - (c.x * b.y) - (b.x * a.y) - (a.x * c.y)
}

/// Monotone proxy for the distance from `c` to line `ab`. Comparison only.
#[inline]
pub fn extremal_distance(a: Point, b: Point, c: Point) -> u64 {
    orientation_sign(a, b, c).unsigned_abs()
}

impl Side {
    #[inline]
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        match orientation_sign(a, b, c) {
            s if s < 0 => Side::Outer,
            0 => Side::Collinear,
            _ => Side::Inner,
        }
    }
}
