//! Configuration defaults.
//!
//! Policy
//! - Defaults mirror a 1280×720 drawing window with a 10px margin, the setting
//!   the stepwise visualizer was tuned for.
//! - The hull reference point defaults to the window midpoint, not a computed
//!   centroid. `ReferencePoint::HullMean` is the explicit opt-in alternative.

use crate::geom::Point;

/// Largest accepted coordinate magnitude.
///
/// `orientation_sign` sums six products of two coordinates in `i64`; with
/// `|c| <= 2^30` each product is at most `2^60` and the sum stays below `2^63`.
pub const MAX_COORD: i64 = 1 << 30;

pub const DEFAULT_WINDOW_WIDTH: i64 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: i64 = 720;
pub const DEFAULT_WINDOW_MARGIN: i64 = 10;
pub const DEFAULT_POINT_COUNT: usize = 1000;
pub const DEFAULT_SEED: u64 = 1;
/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT_FILE: &str = "points.txt";

/// Point used as the pole for the final angular sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferencePoint {
    /// A configured coordinate, typically the middle of the display area.
    /// Only yields a proper polygon when it lies inside the hull.
    Fixed(Point),
    /// Arithmetic mean of the discovered hull points.
    HullMean,
}

/// Hull computation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub reference: ReferencePoint,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            reference: ReferencePoint::Fixed(Point::new(
                DEFAULT_WINDOW_WIDTH / 2,
                DEFAULT_WINDOW_HEIGHT / 2,
            )),
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_reference(reference: ReferencePoint) -> Self {
        Self { reference }
    }
}

/// Rectangular area that random points are drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCfg {
    pub width: i64,
    pub height: i64,
    /// Empty band kept free on every side.
    pub margin: i64,
}

impl Default for WindowCfg {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            margin: DEFAULT_WINDOW_MARGIN,
        }
    }
}

impl WindowCfg {
    /// Midpoint of the window, the default hull reference point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

/// Random input settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomPointsCfg {
    pub count: usize,
    pub window: WindowCfg,
}

impl Default for RandomPointsCfg {
    fn default() -> Self {
        Self {
            count: DEFAULT_POINT_COUNT,
            window: WindowCfg::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reference_is_window_midpoint() {
        let cfg = HullCfg::default();
        assert_eq!(
            cfg.reference,
            ReferencePoint::Fixed(WindowCfg::default().center())
        );
        assert_eq!(WindowCfg::default().center(), Point::new(640, 360));
    }

    #[test]
    fn coordinate_bound_keeps_orientation_in_range() {
        // six products of magnitude MAX_COORD^2 must fit in i64
        let p = (MAX_COORD as i128) * (MAX_COORD as i128);
        assert!(6 * p < i64::MAX as i128);
    }
}
