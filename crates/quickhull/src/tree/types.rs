//! Node, id, and segment types.

use crate::geom::Point;

/// Slot index of a node inside a `NodeTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Directed boundary segment `a → b`; candidates are tested against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Sub-segments `(a → apex)` and `(apex → b)`.
    #[inline]
    pub fn split_at(self, apex: Point) -> (Segment, Segment) {
        (Segment::new(self.a, apex), Segment::new(apex, self.b))
    }
}

/// How far the traversal has got through a node.
///
/// A node enters its second child and becomes `Complete` in the same step, so
/// no separate "after second branch" state is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Never visited.
    NotStarted,
    /// First child entered; the next visit enters the second child.
    AfterFirstBranch,
    /// Nothing left to do here.
    Complete,
}

/// One sub-problem of the divide-and-conquer.
#[derive(Clone, Debug)]
pub struct RecursionNode {
    /// Candidates strictly outside `segment`, sorted, endpoints excluded.
    pub points: Vec<Point>,
    pub segment: Segment,
    pub progress: Progress,
    /// Furthest candidate, set when the node's children are built from it.
    pub furthest: Option<Point>,
    /// `(first, second)`: `(a → furthest)` then `(furthest → b)`.
    pub children: Option<(NodeId, NodeId)>,
    pub parent: Option<NodeId>,
    pub depth: usize,
}

impl RecursionNode {
    pub(crate) fn new(
        points: Vec<Point>,
        segment: Segment,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Self {
        Self {
            points,
            segment,
            progress: Progress::NotStarted,
            furthest: None,
            children: None,
            parent,
            depth,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress == Progress::Complete
    }

    /// Lexicographically first and last candidate.
    #[inline]
    pub fn extremes(&self) -> Option<(Point, Point)> {
        Some((*self.points.first()?, *self.points.last()?))
    }
}
