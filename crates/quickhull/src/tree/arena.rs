//! Slot arena owning every live node.

use std::ops::{Index, IndexMut};

use crate::geom::{partition_outside, sort_lexicographic, Point};

use super::types::{NodeId, RecursionNode, Segment};

/// Arena of recursion nodes.
///
/// Invariants
/// - Every id stored as a child or parent of a live node refers to a live slot.
/// - A node's `children` is written at most once.
#[derive(Clone, Debug, Default)]
pub struct NodeTree {
    slots: Vec<Option<RecursionNode>>,
    free: Vec<NodeId>,
    live: usize,
    created: usize,
}

impl NodeTree {
    /// Tree holding only the root. The root's candidates exclude its endpoints.
    pub fn with_root(points: &[Point], segment: Segment) -> (Self, NodeId) {
        let mut tree = Self::default();
        let pts: Vec<Point> = points
            .iter()
            .copied()
            .filter(|&p| p != segment.a && p != segment.b)
            .collect();
        let root = tree.insert(RecursionNode::new(pts, segment, None, 0));
        (tree, root)
    }

    fn insert(&mut self, node: RecursionNode) -> NodeId {
        self.live += 1;
        self.created += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&RecursionNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut RecursionNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Nodes currently held.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Nodes ever created in this tree, released ones included.
    #[inline]
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Build `parent`'s two children against `first` and `second`.
    ///
    /// Each child gets the parent's candidates strictly outside its segment,
    /// re-sorted.
    pub fn build_children(
        &mut self,
        parent: NodeId,
        first: Segment,
        second: Segment,
    ) -> (NodeId, NodeId) {
        let (first_pts, second_pts, depth) = {
            let node = &self[parent];
            debug_assert!(node.children.is_none(), "children built twice");
            let mut f = partition_outside(first.a, first.b, &node.points);
            let mut s = partition_outside(second.a, second.b, &node.points);
            sort_lexicographic(&mut f);
            sort_lexicographic(&mut s);
            (f, s, node.depth + 1)
        };
        let c1 = self.insert(RecursionNode::new(first_pts, first, Some(parent), depth));
        let c2 = self.insert(RecursionNode::new(second_pts, second, Some(parent), depth));
        self[parent].children = Some((c1, c2));
        (c1, c2)
    }

    /// Split `parent` at its furthest candidate and build both children.
    pub fn spawn_at(&mut self, parent: NodeId, furthest: Point) -> (NodeId, NodeId) {
        let (first, second) = self[parent].segment.split_at(furthest);
        self[parent].furthest = Some(furthest);
        self.build_children(parent, first, second)
    }

    /// Drop every descendant of `id`; `id` itself stays.
    pub fn release_children(&mut self, id: NodeId) {
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(node) = self.get_mut(id) {
            if let Some((c1, c2)) = node.children.take() {
                stack.push(c1);
                stack.push(c2);
            }
        }
        while let Some(k) = stack.pop() {
            if let Some(node) = self.slots.get_mut(k.0).and_then(Option::take) {
                if let Some((c1, c2)) = node.children {
                    stack.push(c1);
                    stack.push(c2);
                }
                self.live -= 1;
                self.free.push(k);
            }
        }
    }
}

impl Index<NodeId> for NodeTree {
    type Output = RecursionNode;

    fn index(&self, id: NodeId) -> &RecursionNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {id:?} is not live"),
        }
    }
}

impl IndexMut<NodeId> for NodeTree {
    fn index_mut(&mut self, id: NodeId) -> &mut RecursionNode {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {id:?} is not live"),
        }
    }
}
