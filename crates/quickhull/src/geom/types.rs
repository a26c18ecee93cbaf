//! Point type.

use std::fmt;

use nalgebra::Vector2;

/// Integer point `(x, y)`.
///
/// The derived ordering is lexicographic (x first, then y): left-to-right,
/// top-to-bottom in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Float view for angle computations.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Largest absolute coordinate.
    #[inline]
    pub fn max_abs(self) -> u64 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
