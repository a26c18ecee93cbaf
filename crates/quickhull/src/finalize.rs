//! Hull finalization: angular ordering and text output.
//!
//! Points are ordered by the angle of `reference − point` (degrees, ascending)
//! around a reference point. With the default fixed reference this is the
//! nominal window center, which only yields a proper polygon when it lies
//! inside the hull; `ReferencePoint::HullMean` always does for a
//! non-degenerate hull. No deduplication happens here.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nalgebra::Vector2;

use crate::cfg::ReferencePoint;
use crate::error::HullError;
use crate::geom::{orientation_sign, Point};

/// Closed polygon boundary; the last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    points: Vec<Point>,
    reference: Vector2<f64>,
}

impl Hull {
    /// Order `points` (discovery order) around `reference`.
    pub fn from_points(points: &[Point], reference: ReferencePoint) -> Self {
        let reference = match reference {
            ReferencePoint::Fixed(p) => p.to_vec2(),
            ReferencePoint::HullMean => mean(points),
        };
        Self {
            points: sort_counterclockwise(points, reference),
            reference,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pole used for sorting.
    #[inline]
    pub fn reference(&self) -> Vector2<f64> {
        self.reference
    }

    /// Consecutive edges, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }

    /// Whether `p` is inside or on the boundary.
    ///
    /// Inside means a non-negative orientation against every edge. Hulls of
    /// fewer than three points are treated as a segment (or a point).
    pub fn contains(&self, p: Point) -> bool {
        match self.points.as_slice() {
            [] => false,
            [q] => *q == p,
            [a, b] => {
                orientation_sign(*a, *b, p) == 0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            _ => self.edges().all(|(a, b)| orientation_sign(a, b, p) >= 0),
        }
    }

    /// Write one `"<x>,<y>"` line per point.
    pub fn write_to<W: Write>(&self, w: W) -> io::Result<()> {
        let mut w = BufWriter::new(w);
        for p in &self.points {
            writeln!(w, "{},{}", p.x, p.y)?;
        }
        w.flush()
    }

    /// Create (or truncate) `path` and write the hull into it.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), HullError> {
        let file = File::create(path.as_ref())?;
        self.write_to(file)?;
        Ok(())
    }
}

/// Angle of `reference − p` in degrees, in (-180, 180].
#[inline]
pub fn polar_angle_deg(reference: Vector2<f64>, p: Point) -> f64 {
    let d = reference - p.to_vec2();
    d.y.atan2(d.x).to_degrees()
}

/// Stable sort by ascending `polar_angle_deg`; ties keep input order.
pub fn sort_counterclockwise(points: &[Point], reference: Vector2<f64>) -> Vec<Point> {
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|&p| (polar_angle_deg(reference, p), p))
        .collect();
    keyed.sort_by(|l, r| l.0.total_cmp(&r.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

fn mean(points: &[Point]) -> Vector2<f64> {
    if points.is_empty() {
        return Vector2::zeros();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.to_vec2());
    sum / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(10, 0),
            Point::new(0, 10),
        ]
    }

    #[test]
    fn square_sorted_around_center_turns_consistently() {
        let hull = Hull::from_points(&square(), ReferencePoint::Fixed(Point::new(5, 5)));
        assert_eq!(
            hull.points(),
            &[
                Point::new(10, 10),
                Point::new(0, 10),
                Point::new(0, 0),
                Point::new(10, 0),
            ]
        );
        let pts = hull.points();
        for k in 0..pts.len() {
            let s = orientation_sign(pts[k], pts[(k + 1) % 4], pts[(k + 2) % 4]);
            assert!(s > 0);
        }
        assert!(hull.contains(Point::new(5, 5)));
        assert!(hull.contains(Point::new(0, 5)));
        assert!(!hull.contains(Point::new(11, 5)));
    }

    #[test]
    fn hull_mean_matches_fixed_center_for_square() {
        let a = Hull::from_points(&square(), ReferencePoint::HullMean);
        let b = Hull::from_points(&square(), ReferencePoint::Fixed(Point::new(5, 5)));
        assert_eq!(a.points(), b.points());
        assert!((a.reference() - Vector2::new(5.0, 5.0)).norm() < 1e-12);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut p = square();
        p.push(Point::new(0, 0));
        let hull = Hull::from_points(&p, ReferencePoint::Fixed(Point::new(5, 5)));
        assert_eq!(hull.len(), 5);
    }

    #[test]
    fn angle_uses_reference_minus_point() {
        let c = Vector2::new(0.0, 0.0);
        assert!((polar_angle_deg(c, Point::new(-1, 0)) - 0.0).abs() < 1e-12);
        assert!((polar_angle_deg(c, Point::new(0, -1)) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn write_to_emits_one_line_per_point() {
        let hull = Hull::from_points(&square(), ReferencePoint::Fixed(Point::new(5, 5)));
        let mut buf = Vec::new();
        hull.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "10,10\n0,10\n0,0\n10,0\n"
        );
    }

    #[test]
    fn segment_hull_contains_only_collinear_span() {
        let hull = Hull::from_points(
            &[Point::new(0, 5), Point::new(2, 5)],
            ReferencePoint::HullMean,
        );
        assert!(hull.contains(Point::new(1, 5)));
        assert!(!hull.contains(Point::new(3, 5)));
        assert!(!hull.contains(Point::new(1, 6)));
        assert_eq!(hull.edges().count(), 2);
    }
}
