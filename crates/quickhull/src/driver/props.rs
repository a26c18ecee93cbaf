//! Property tests over small integer lattices.

use proptest::prelude::*;

use super::QuickHull;
use crate::cfg::{HullCfg, ReferencePoint};
use crate::geom::{orientation_sign, Point};

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-40i64..40, -40i64..40), 2..48)
        .prop_map(|raw| raw.into_iter().map(Point::from).collect())
        .prop_filter("needs two distinct points", |p: &Vec<Point>| {
            p.iter().any(|&q| q != p[0])
        })
}

fn mean_cfg() -> HullCfg {
    HullCfg::with_reference(ReferencePoint::HullMean)
}

/// Andrew's monotone chain, collinear points dropped.
fn monotone_chain(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort();
    pts.dedup();
    let mut lower: Vec<Point> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2
            && orientation_sign(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && orientation_sign(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

proptest! {
    #[test]
    fn terminates_within_node_bound(points in cloud()) {
        let mut qh = QuickHull::new(&points, mean_cfg()).unwrap();
        let limit = 4 * points.len() + 8;
        let mut calls = 0;
        while qh.step() {
            calls += 1;
            prop_assert!(calls <= limit, "no termination after {calls} steps");
        }
        let created = qh.tree().created_count();
        prop_assert_eq!(created, 3 + 2 * (qh.hull_points().len() - 2));
        prop_assert!(qh.steps() <= 2 * created);
    }

    #[test]
    fn hull_contains_every_input_point(points in cloud()) {
        let hull = QuickHull::solve(&points, mean_cfg()).unwrap();
        for &p in &points {
            prop_assert!(hull.contains(p), "{} outside {:?}", p, hull.points());
        }
    }

    #[test]
    fn hull_turns_consistently(points in cloud()) {
        let hull = QuickHull::solve(&points, mean_cfg()).unwrap();
        let v = hull.points();
        if v.len() >= 3 {
            for k in 0..v.len() {
                let s = orientation_sign(v[k], v[(k + 1) % v.len()], v[(k + 2) % v.len()]);
                prop_assert!(s > 0, "reflex turn at {}", v[(k + 1) % v.len()]);
            }
        }
    }

    #[test]
    fn hull_points_are_exactly_the_vertices(points in cloud()) {
        let mut qh = QuickHull::new(&points, mean_cfg()).unwrap();
        qh.run();
        let mut got = qh.hull_points().to_vec();
        got.sort();
        let before = got.len();
        got.dedup();
        prop_assert_eq!(before, got.len(), "duplicate hull point");
        let mut want = monotone_chain(&points);
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn runs_are_deterministic(points in cloud()) {
        let mut a = QuickHull::new(&points, HullCfg::default()).unwrap();
        let mut b = QuickHull::new(&points, HullCfg::default()).unwrap();
        a.run();
        b.run();
        prop_assert_eq!(a.hull_points(), b.hull_points());
        prop_assert_eq!(a.finalize(), b.finalize());

        // input order does not matter: the driver sorts first
        let mut rev = points.clone();
        rev.reverse();
        let mut c = QuickHull::new(&rev, HullCfg::default()).unwrap();
        c.run();
        prop_assert_eq!(a.hull_points(), c.hull_points());
    }
}
