//! The `QuickHull` computation object.

use tracing::{debug, trace};

use crate::cfg::{HullCfg, RandomPointsCfg, MAX_COORD};
use crate::error::HullError;
use crate::finalize::Hull;
use crate::geom::{select_furthest, sort_lexicographic, Point};
use crate::input::random_points;
use crate::tree::{NodeId, NodeTree, Progress, RecursionNode, Segment};

/// Node processed by the latest productive `step()`.
///
/// Captured before the cursor moves on, so it describes the node that was
/// worked on rather than the one entered next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub node: NodeId,
    pub segment: Segment,
    /// Lexicographically first and last candidate of the visited node.
    pub extremes: Option<(Point, Point)>,
    /// The visited node's furthest candidate; `None` for the root.
    pub furthest: Option<Point>,
}

/// One stepwise hull computation: the node tree, its cursor, and the hull
/// points discovered so far.
///
/// All accessors reflect the state between two `step()` calls.
#[derive(Clone, Debug)]
pub struct QuickHull {
    cfg: HullCfg,
    /// Input, sorted lexicographically.
    input: Vec<Point>,
    tree: NodeTree,
    cursor: NodeId,
    /// Discovery order, not geometric order.
    hull: Vec<Point>,
    extremes: (Point, Point),
    visited: Option<Visit>,
    steps: usize,
    finished: bool,
}

impl QuickHull {
    /// Start a computation over `points`.
    ///
    /// Fails on fewer than two points, on inputs whose points are all equal,
    /// and on coordinates beyond `MAX_COORD`.
    pub fn new(points: &[Point], cfg: HullCfg) -> Result<Self, HullError> {
        if points.len() < 2 {
            return Err(HullError::TooFewPoints {
                found: points.len(),
            });
        }
        if let Some(&p) = points.iter().find(|p| p.max_abs() > MAX_COORD as u64) {
            return Err(HullError::CoordinateOutOfRange {
                point: p,
                bound: MAX_COORD,
            });
        }
        let mut input = points.to_vec();
        sort_lexicographic(&mut input);
        let (min, max) = (input[0], input[input.len() - 1]);
        if min == max {
            return Err(HullError::NoDistinctExtremes);
        }

        let seed = Segment::new(min, max);
        let (mut tree, root) = NodeTree::with_root(&input, seed);
        tree.build_children(root, seed, seed.reversed());
        debug!(
            points = input.len(),
            min = %min,
            max = %max,
            "hull computation started"
        );
        Ok(Self {
            cfg,
            input,
            tree,
            cursor: root,
            hull: vec![min, max],
            extremes: (min, max),
            visited: None,
            steps: 0,
            finished: false,
        })
    }

    /// Start a computation over a seeded random point cloud.
    pub fn from_random(
        points_cfg: RandomPointsCfg,
        seed: u64,
        cfg: HullCfg,
    ) -> Result<Self, HullError> {
        let points = random_points(points_cfg, seed)?;
        Self::new(&points, cfg)
    }

    /// Replace the whole computation with a fresh one over `points`.
    ///
    /// On error the current computation is left as it was.
    pub fn reset(&mut self, points: &[Point]) -> Result<(), HullError> {
        *self = Self::new(points, self.cfg)?;
        Ok(())
    }

    /// Advance by one recursion node. Returns `false` once nothing is left.
    pub fn step(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.visited = None;
        if self.tree[self.cursor].points.is_empty() {
            self.tree[self.cursor].progress = Progress::Complete;
        }
        while self.tree[self.cursor].is_complete() {
            self.tree.release_children(self.cursor);
            match self.tree[self.cursor].parent {
                Some(parent) => self.cursor = parent,
                None => {
                    self.finished = true;
                    debug!(
                        steps = self.steps,
                        hull_points = self.hull.len(),
                        nodes = self.tree.created_count(),
                        "hull computation finished"
                    );
                    return false;
                }
            }
        }

        let id = self.cursor;
        let progress = self.tree[id].progress;
        let existing = self.tree[id].children;
        let children = match existing {
            Some(c) => Some(c),
            None => self.split(id),
        };
        let Some((first, second)) = children else {
            // only reachable with an empty candidate set, handled above
            self.tree[id].progress = Progress::Complete;
            return true;
        };
        self.cursor = if progress == Progress::NotStarted {
            self.tree[id].progress = Progress::AfterFirstBranch;
            first
        } else {
            self.tree[id].progress = Progress::Complete;
            second
        };
        let node = &self.tree[id];
        self.visited = Some(Visit {
            node: id,
            segment: node.segment,
            extremes: node.extremes(),
            furthest: node.furthest,
        });
        self.steps += 1;
        trace!(
            step = self.steps,
            node = id.0,
            a = %self.tree[id].segment.a,
            b = %self.tree[id].segment.b,
            furthest = ?self.tree[id].furthest,
            progress = ?self.tree[id].progress,
            "step"
        );
        true
    }

    /// First visit of a non-root node: record its furthest point and build
    /// the children around it.
    fn split(&mut self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let node = &self.tree[id];
        let furthest = select_furthest(node.segment.a, node.segment.b, &node.points)?;
        self.hull.push(furthest);
        Some(self.tree.spawn_at(id, furthest))
    }

    /// Step until done; returns the number of productive steps taken.
    pub fn run(&mut self) -> usize {
        let before = self.steps;
        while self.step() {}
        self.steps - before
    }

    /// Angular ordering of the hull points discovered so far.
    ///
    /// Final once `is_finished()` holds; earlier calls give a partial hull.
    pub fn finalize(&self) -> Hull {
        Hull::from_points(&self.hull, self.cfg.reference)
    }

    /// Build, run to completion, and finalize in one go.
    pub fn solve(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
        let mut qh = Self::new(points, cfg)?;
        qh.run();
        Ok(qh.finalize())
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Productive steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn cfg(&self) -> HullCfg {
        self.cfg
    }

    /// The sorted input point set.
    #[inline]
    pub fn input_points(&self) -> &[Point] {
        &self.input
    }

    /// Hull points in discovery order, extremes first.
    #[inline]
    pub fn hull_points(&self) -> &[Point] {
        &self.hull
    }

    /// Global lexicographic minimum and maximum seeding the root.
    #[inline]
    pub fn extremes(&self) -> (Point, Point) {
        self.extremes
    }

    /// Node handled by the latest `step()`; `None` before the first step and
    /// after a step that only popped finished nodes.
    #[inline]
    pub fn last_visit(&self) -> Option<Visit> {
        self.visited
    }

    /// Furthest point of the node visited by the latest step.
    #[inline]
    pub fn furthest(&self) -> Option<Point> {
        self.visited.and_then(|v| v.furthest)
    }

    #[inline]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    #[inline]
    pub fn current_node(&self) -> &RecursionNode {
        &self.tree[self.cursor]
    }

    /// Boundary segment of the node under the cursor, entered next.
    #[inline]
    pub fn current_segment(&self) -> Segment {
        self.current_node().segment
    }

    /// First and last candidate of the node visited by the latest step.
    ///
    /// `current_node().extremes()` gives the same for the node entered next.
    #[inline]
    pub fn candidate_extremes(&self) -> Option<(Point, Point)> {
        self.visited.and_then(|v| v.extremes)
    }

    #[inline]
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }
}
