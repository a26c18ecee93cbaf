//! Point-set partitioning and furthest-point selection.

use super::predicates::{extremal_distance, orientation_sign};
use super::types::Point;

/// Points strictly on the outer side of `a → b`, endpoints excluded.
///
/// Collinear and inner points are dropped. Input order is preserved, so a
/// sorted input yields a sorted output.
pub fn partition_outside(a: Point, b: Point, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| p != a && p != b)
        .filter(|&p| orientation_sign(a, b, p) < 0)
        .collect()
}

/// Point of `points` furthest from line `a b`; the first one wins ties.
///
/// Returns `None` only for an empty slice.
pub fn select_furthest(a: Point, b: Point, points: &[Point]) -> Option<Point> {
    let mut best: Option<(u64, Point)> = None;
    for &p in points {
        let d = extremal_distance(a, b, p);
        match best {
            Some((bd, _)) if d <= bd => {}
            _ => best = Some((d, p)),
        }
    }
    best.map(|(_, p)| p)
}

/// Sort left-to-right, top-to-bottom.
#[inline]
pub fn sort_lexicographic(points: &mut [Point]) {
    points.sort_unstable();
}
